//! The rectangle mark: the plain box-shaped mark without a payload
//!
//! Shares the corner/center/size attribute model and interaction geometry
//! with the image mark; only render resolution differs.

use crate::attrs::{AttributeKind, AttributeSpec, AttributeStore, SolverRole};
use crate::coords::CoordinateSystem;
use crate::geometry::{BoundingBox, Point};
use crate::graphics::{Element, Group, LineJoin, Rect};
use crate::interaction::{DropZone, Handle, LinkAnchor, SnappingGuide};
use crate::resources::ResourceResolver;
use crate::solver::ConstraintSolver;

use super::image::{
    box_bounding_box, box_drop_zones, box_handles, box_link_anchors, box_snapping_guides,
    build_box_constraints, initialize_box_state, Corners, CX, CY, FILL, HEIGHT, OPACITY, STROKE,
    STROKE_WIDTH, VISIBLE, WIDTH, X1, X2, Y1, Y2,
};
use super::{CreationGesture, MarkClass, MarkMetadata};

const SCHEMA: &[AttributeSpec] = &[
    AttributeSpec::number(X1, SolverRole::Primary),
    AttributeSpec::number(Y1, SolverRole::Primary),
    AttributeSpec::number(X2, SolverRole::Primary),
    AttributeSpec::number(Y2, SolverRole::Primary),
    AttributeSpec::number(CX, SolverRole::Derived),
    AttributeSpec::number(CY, SolverRole::Derived),
    AttributeSpec::number(WIDTH, SolverRole::Derived),
    AttributeSpec::number(HEIGHT, SolverRole::Derived),
    AttributeSpec::style(FILL, AttributeKind::Color),
    AttributeSpec::style(STROKE, AttributeKind::Color),
    AttributeSpec::style(STROKE_WIDTH, AttributeKind::Number),
    AttributeSpec::style(OPACITY, AttributeKind::Number),
    AttributeSpec::style(VISIBLE, AttributeKind::Boolean),
];

/// The rectangle mark type
#[derive(Debug, Clone, Copy, Default)]
pub struct RectMark;

impl RectMark {
    pub fn new() -> Self {
        Self
    }
}

impl MarkClass for RectMark {
    fn metadata(&self) -> MarkMetadata {
        MarkMetadata {
            display_name: "Rectangle",
            icon: "mark-rect",
            creation: CreationGesture::DragRect {
                x_attributes: [X1, X2],
                y_attributes: [Y1, Y2],
            },
        }
    }

    fn schema(&self) -> &'static [AttributeSpec] {
        SCHEMA
    }

    fn initialize_state(&self, store: &mut AttributeStore) {
        initialize_box_state(store);
        debug_assert!(store.matches_schema(SCHEMA));
    }

    fn build_constraints(&self, element_id: &str, solver: &mut dyn ConstraintSolver) {
        build_box_constraints(element_id, solver);
    }

    fn graphics(
        &self,
        store: &AttributeStore,
        _cs: &dyn CoordinateSystem,
        offset: Point,
        _resources: &dyn ResourceResolver,
    ) -> Option<Element> {
        if !store.boolean(VISIBLE) {
            return None;
        }

        let c = Corners::read(store, offset);
        let rect = Rect {
            x1: c.x1,
            y1: c.y1,
            x2: c.x2,
            y2: c.y2,
            fill: store.color(FILL).map(str::to_string),
            stroke: store.color(STROKE).map(str::to_string),
            stroke_width: store.number(STROKE_WIDTH),
            line_join: LineJoin::Miter,
        };
        Some(Element::Group(
            Group::new(vec![Element::Rect(rect)]).with_opacity(store.number(OPACITY)),
        ))
    }

    fn handles(&self, store: &AttributeStore) -> Vec<Handle> {
        box_handles(store)
    }

    fn snapping_guides(&self, store: &AttributeStore) -> Vec<SnappingGuide> {
        box_snapping_guides(store)
    }

    fn drop_zones(&self, store: &AttributeStore) -> Vec<DropZone> {
        box_drop_zones(store)
    }

    fn link_anchors(&self, store: &AttributeStore) -> Vec<LinkAnchor> {
        box_link_anchors(store)
    }

    fn bounding_box(&self, store: &AttributeStore) -> BoundingBox {
        box_bounding_box(store)
    }
}
