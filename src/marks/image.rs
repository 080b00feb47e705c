//! The image mark: a box-shaped mark carrying an image payload
//!
//! Geometry is described by two opposite corners plus derived center and
//! size attributes kept consistent by hard constraints. The corners are not
//! ordered: a user can drag one corner past the other, and the flipped box
//! still renders and stays editable. All derivations below therefore use
//! min/max or abs logic instead of assuming `x2 >= x1` / `y2 >= y1`.

use crate::attrs::{AttributeKind, AttributeSpec, AttributeStore, AttributeValue, SolverRole};
use crate::coords::CoordinateSystem;
use crate::geometry::{BoundingBox, Point, Vector};
use crate::graphics::{Element, Group, Image, ImageMode, Rect};
use crate::interaction::{
    AnchorPoint, Axis, DataKind, DropZone, Handle, HandleAction, LinkAnchor, SnappingGuide,
};
use crate::resources::{placeholder_image, ResourceResolver};
use crate::solver::{ConstraintSolver, Strength};

use super::{CreationGesture, MarkClass, MarkMetadata};

// Attribute names
pub const X1: &str = "x1";
pub const Y1: &str = "y1";
pub const X2: &str = "x2";
pub const Y2: &str = "y2";
pub const CX: &str = "cx";
pub const CY: &str = "cy";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const FILL: &str = "fill";
pub const STROKE: &str = "stroke";
pub const STROKE_WIDTH: &str = "stroke_width";
pub const OPACITY: &str = "opacity";
pub const VISIBLE: &str = "visible";
pub const IMAGE: &str = "image";
pub const IMAGE_MODE: &str = "image_mode";

/// Default half-extents of a freshly created image mark
const DEFAULT_HALF_WIDTH: f64 = 15.0;
const DEFAULT_HALF_HEIGHT: f64 = 25.0;

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
    AttributeSpec::style(IMAGE, AttributeKind::String),
    AttributeSpec::style(IMAGE_MODE, AttributeKind::Enum),
];

/// Type-level properties, distinct from per-instance attributes.
///
/// Turning `visible` off hides every instance of the type regardless of the
/// per-instance `visible` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageProperties {
    pub visible: bool,
}

impl Default for ImageProperties {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// The image mark type
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageMark {
    pub properties: ImageProperties,
}

impl ImageMark {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Corner attribute values for one instance, offset-translated
#[derive(Debug, Clone, Copy)]
pub(super) struct Corners {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Corners {
    pub fn read(store: &AttributeStore, offset: Point) -> Self {
        Self {
            x1: store.number(X1) + offset.x,
            y1: store.number(Y1) + offset.y,
            x2: store.number(X2) + offset.x,
            y2: store.number(Y2) + offset.y,
        }
    }

    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Emit the four hard equalities relating corners, size, and center.
/// Shared by the box-shaped mark types.
pub(super) fn build_box_constraints(element_id: &str, solver: &mut dyn ConstraintSolver) {
    let x1 = solver.attr(element_id, X1);
    let y1 = solver.attr(element_id, Y1);
    let x2 = solver.attr(element_id, X2);
    let y2 = solver.attr(element_id, Y2);
    let cx = solver.attr(element_id, CX);
    let cy = solver.attr(element_id, CY);
    let width = solver.attr(element_id, WIDTH);
    let height = solver.attr(element_id, HEIGHT);

    // x2 - x1 = width, y2 - y1 = height
    solver.add_linear(Strength::Hard, 0.0, &[(1.0, x2), (-1.0, x1)], &[(1.0, width)]);
    solver.add_linear(Strength::Hard, 0.0, &[(1.0, y2), (-1.0, y1)], &[(1.0, height)]);
    // 2*cx = x1 + x2, 2*cy = y1 + y2
    solver.add_linear(Strength::Hard, 0.0, &[(2.0, cx)], &[(1.0, x1), (1.0, x2)]);
    solver.add_linear(Strength::Hard, 0.0, &[(2.0, cy)], &[(1.0, y1), (1.0, y2)]);
}

/// Initialize the attributes shared by box-shaped marks
pub(super) fn initialize_box_state(store: &mut AttributeStore) {
    store.set_number(X1, -DEFAULT_HALF_WIDTH);
    store.set_number(Y1, -DEFAULT_HALF_HEIGHT);
    store.set_number(X2, DEFAULT_HALF_WIDTH);
    store.set_number(Y2, DEFAULT_HALF_HEIGHT);
    store.set_number(CX, 0.0);
    store.set_number(CY, 0.0);
    store.set_number(WIDTH, DEFAULT_HALF_WIDTH * 2.0);
    store.set_number(HEIGHT, DEFAULT_HALF_HEIGHT * 2.0);
    store.set(FILL, AttributeValue::Color(None));
    store.set(STROKE, AttributeValue::Color(None));
    store.set_number(STROKE_WIDTH, 1.0);
    store.set_number(OPACITY, 1.0);
    store.set(VISIBLE, AttributeValue::Boolean(true));
}

/// Four line handles (one per corner attribute) and four corner point
/// handles; corner points write both adjacent attributes atomically.
pub(super) fn box_handles(store: &AttributeStore) -> Vec<Handle> {
    let c = Corners::read(store, Point::default());
    let x_span = [c.x1.min(c.x2), c.x1.max(c.x2)];
    let y_span = [c.y1.min(c.y2), c.y1.max(c.y2)];

    vec![
        Handle::Line {
            axis: Axis::X,
            value: c.x1,
            span: y_span,
            actions: vec![HandleAction::new(Axis::X, X1)],
        },
        Handle::Line {
            axis: Axis::X,
            value: c.x2,
            span: y_span,
            actions: vec![HandleAction::new(Axis::X, X2)],
        },
        Handle::Line {
            axis: Axis::Y,
            value: c.y1,
            span: x_span,
            actions: vec![HandleAction::new(Axis::Y, Y1)],
        },
        Handle::Line {
            axis: Axis::Y,
            value: c.y2,
            span: x_span,
            actions: vec![HandleAction::new(Axis::Y, Y2)],
        },
        Handle::Point {
            x: c.x1,
            y: c.y1,
            actions: vec![HandleAction::new(Axis::X, X1), HandleAction::new(Axis::Y, Y1)],
        },
        Handle::Point {
            x: c.x1,
            y: c.y2,
            actions: vec![HandleAction::new(Axis::X, X1), HandleAction::new(Axis::Y, Y2)],
        },
        Handle::Point {
            x: c.x2,
            y: c.y1,
            actions: vec![HandleAction::new(Axis::X, X2), HandleAction::new(Axis::Y, Y1)],
        },
        Handle::Point {
            x: c.x2,
            y: c.y2,
            actions: vec![HandleAction::new(Axis::X, X2), HandleAction::new(Axis::Y, Y2)],
        },
    ]
}

/// Both edges and the center on each axis
pub(super) fn box_snapping_guides(store: &AttributeStore) -> Vec<SnappingGuide> {
    vec![
        SnappingGuide::new(Axis::X, store.number(X1), X1),
        SnappingGuide::new(Axis::X, store.number(X2), X2),
        SnappingGuide::new(Axis::X, store.number(CX), CX),
        SnappingGuide::new(Axis::Y, store.number(Y1), Y1),
        SnappingGuide::new(Axis::Y, store.number(Y2), Y2),
        SnappingGuide::new(Axis::Y, store.number(CY), CY),
    ]
}

/// Top edge drives width, left edge drives height
pub(super) fn box_drop_zones(store: &AttributeStore) -> Vec<DropZone> {
    let c = Corners::read(store, Point::default());
    vec![
        DropZone {
            line: (Point::new(c.x1, c.y2), Point::new(c.x2, c.y2)),
            data_kind: DataKind::Numerical,
            attribute: WIDTH,
            attribute_kind: AttributeKind::Number,
            auto_range: true,
        },
        DropZone {
            line: (Point::new(c.x1, c.y1), Point::new(c.x1, c.y2)),
            data_kind: DataKind::Numerical,
            attribute: HEIGHT,
            attribute_kind: AttributeKind::Number,
            auto_range: true,
        },
    ]
}

/// Four edge anchor groups plus four edge-midpoint anchors.
///
/// Directions follow attribute semantics (the x1 edge points toward -x even
/// when the box is flipped) so anchor identities stay stable under drags.
pub(super) fn box_link_anchors(store: &AttributeStore) -> Vec<LinkAnchor> {
    let c = Corners::read(store, Point::default());
    let center = c.center();

    let corner = |x: f64, y: f64, xa: &'static str, ya: &'static str| AnchorPoint {
        x,
        y,
        x_attribute: xa,
        y_attribute: ya,
    };

    vec![
        LinkAnchor {
            points: vec![corner(c.x1, c.y1, X1, Y1), corner(c.x1, c.y2, X1, Y2)],
            direction: Vector::new(-1.0, 0.0),
        },
        LinkAnchor {
            points: vec![corner(c.x2, c.y1, X2, Y1), corner(c.x2, c.y2, X2, Y2)],
            direction: Vector::new(1.0, 0.0),
        },
        LinkAnchor {
            points: vec![corner(c.x1, c.y1, X1, Y1), corner(c.x2, c.y1, X2, Y1)],
            direction: Vector::new(0.0, -1.0),
        },
        LinkAnchor {
            points: vec![corner(c.x1, c.y2, X1, Y2), corner(c.x2, c.y2, X2, Y2)],
            direction: Vector::new(0.0, 1.0),
        },
        LinkAnchor {
            points: vec![corner(c.x1, center.y, X1, CY)],
            direction: Vector::new(-1.0, 0.0),
        },
        LinkAnchor {
            points: vec![corner(c.x2, center.y, X2, CY)],
            direction: Vector::new(1.0, 0.0),
        },
        LinkAnchor {
            points: vec![corner(center.x, c.y1, CX, Y1)],
            direction: Vector::new(0.0, -1.0),
        },
        LinkAnchor {
            points: vec![corner(center.x, c.y2, CX, Y2)],
            direction: Vector::new(0.0, 1.0),
        },
    ]
}

pub(super) fn box_bounding_box(store: &AttributeStore) -> BoundingBox {
    BoundingBox::from_corners(
        store.number(X1),
        store.number(Y1),
        store.number(X2),
        store.number(Y2),
    )
}

impl MarkClass for ImageMark {
    fn metadata(&self) -> MarkMetadata {
        MarkMetadata {
            display_name: "Image",
            icon: "mark-image",
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
        store.set(IMAGE, AttributeValue::String(String::new()));
        store.set(
            IMAGE_MODE,
            AttributeValue::Enum(ImageMode::Letterbox.as_tag().to_string()),
        );
        debug_assert!(store.matches_schema(SCHEMA));
    }

    fn build_constraints(&self, element_id: &str, solver: &mut dyn ConstraintSolver) {
        build_box_constraints(element_id, solver);
    }

    fn graphics(
        &self,
        store: &AttributeStore,
        cs: &dyn CoordinateSystem,
        offset: Point,
        resources: &dyn ResourceResolver,
    ) -> Option<Element> {
        if !self.properties.visible || !store.boolean(VISIBLE) {
            return None;
        }

        let c = Corners::read(store, offset);
        let center = c.center();
        let mut elements = Vec::new();

        if let Some(fill) = store.color(FILL) {
            elements.push(Element::Rect(Rect::filled(c.x1, c.y1, c.x2, c.y2, fill)));
        }

        // Measure the box in the transformed frame: the distance between the
        // transformed midpoints of opposite edges stays correct under
        // non-Cartesian coordinate systems.
        let local_width = cs
            .transform_point(c.x1, center.y)
            .distance(cs.transform_point(c.x2, center.y));
        let local_height = cs
            .transform_point(center.x, c.y1)
            .distance(cs.transform_point(center.x, c.y2));

        let key = store.string(IMAGE);
        let src = if key.is_empty() {
            placeholder_image().to_string()
        } else {
            resources
                .resolve(key)
                .unwrap_or_else(|| placeholder_image().to_string())
        };

        let image = Image {
            src,
            x: -local_width / 2.0,
            y: -local_height / 2.0,
            width: local_width,
            height: local_height,
            mode: ImageMode::from_tag(store.enum_tag(IMAGE_MODE)),
        };
        elements.push(Element::Group(
            Group::new(vec![Element::Image(image)])
                .with_transform(cs.local_transform(center.x, center.y)),
        ));

        if let Some(stroke) = store.color(STROKE) {
            elements.push(Element::Rect(Rect::stroked(
                c.x1,
                c.y1,
                c.x2,
                c.y2,
                stroke,
                store.number(STROKE_WIDTH),
            )));
        }

        Some(Element::Group(
            Group::new(elements).with_opacity(store.number(OPACITY)),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CartesianCoordinates, PolarCoordinates};
    use crate::resources::PassthroughResolver;
    use crate::solver::RecordingSolver;

    fn default_store() -> AttributeStore {
        let mark = ImageMark::new();
        let mut store = AttributeStore::new();
        mark.initialize_state(&mut store);
        store
    }

    #[test]
    fn test_defaults() {
        let store = default_store();
        assert_eq!(store.number(X1), -15.0);
        assert_eq!(store.number(Y1), -25.0);
        assert_eq!(store.number(X2), 15.0);
        assert_eq!(store.number(Y2), 25.0);
        assert_eq!(store.number(WIDTH), 30.0);
        assert_eq!(store.number(HEIGHT), 50.0);
        assert_eq!(store.color(FILL), None);
        assert_eq!(store.color(STROKE), None);
        assert_eq!(store.number(OPACITY), 1.0);
        assert!(store.boolean(VISIBLE));
        assert_eq!(store.string(IMAGE), "");
        assert_eq!(store.enum_tag(IMAGE_MODE), "letterbox");
    }

    #[test]
    fn test_constraint_emission_is_structural() {
        let mark = ImageMark::new();
        let mut rec = RecordingSolver::new();
        mark.build_constraints("m1", &mut rec);

        assert_eq!(rec.constraints.len(), 4);
        assert!(rec.constraints.iter().all(|c| c.strength == Strength::Hard));
        assert!(rec.constraints.iter().all(|c| c.bias == 0.0));

        // Re-emission produces the identical equation set
        let mut again = RecordingSolver::new();
        mark.build_constraints("m1", &mut again);
        assert_eq!(rec.constraints, again.constraints);
    }

    #[test]
    fn test_invisible_skips_drawing() {
        let mark = ImageMark::new();
        let mut store = default_store();
        store.set(VISIBLE, AttributeValue::Boolean(false));
        let result = mark.graphics(
            &store,
            &CartesianCoordinates,
            Point::default(),
            &PassthroughResolver,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_type_level_visibility_overrides_instance() {
        let mark = ImageMark {
            properties: ImageProperties { visible: false },
        };
        let store = default_store();
        let result = mark.graphics(
            &store,
            &CartesianCoordinates,
            Point::default(),
            &PassthroughResolver,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_default_graphics_is_placeholder_only() {
        let mark = ImageMark::new();
        let store = default_store();
        let root = mark
            .graphics(
                &store,
                &CartesianCoordinates,
                Point::default(),
                &PassthroughResolver,
            )
            .expect("visible mark should draw");

        let group = root.as_group().expect("root is a group");
        assert_eq!(group.opacity, 1.0);
        // No fill and no stroke: only the image subtree
        assert_eq!(group.elements.len(), 1);
        let image_group = group.elements[0].as_group().expect("image subtree");
        let image = image_group.elements[0].as_image().expect("image primitive");
        assert!(image.src.starts_with("data:image/svg+xml;base64,"));
        assert_eq!(image.width, 30.0);
        assert_eq!(image.height, 50.0);
        assert_eq!(image.mode, ImageMode::Letterbox);
    }

    #[test]
    fn test_fill_under_image_stroke_over() {
        let mark = ImageMark::new();
        let mut store = default_store();
        store.set(FILL, AttributeValue::Color(Some("#102030".to_string())));
        store.set(STROKE, AttributeValue::Color(Some("#405060".to_string())));
        store.set_number(STROKE_WIDTH, 2.5);

        let root = mark
            .graphics(
                &store,
                &CartesianCoordinates,
                Point::default(),
                &PassthroughResolver,
            )
            .unwrap();
        let group = root.as_group().unwrap();
        assert_eq!(group.elements.len(), 3);

        let fill_rect = group.elements[0].as_rect().expect("fill rect first");
        assert_eq!(fill_rect.fill.as_deref(), Some("#102030"));
        assert!(fill_rect.stroke.is_none());

        assert!(group.elements[1].as_group().is_some(), "image group second");

        let stroke_rect = group.elements[2].as_rect().expect("stroke rect last");
        assert!(stroke_rect.fill.is_none());
        assert_eq!(stroke_rect.stroke.as_deref(), Some("#405060"));
        assert_eq!(stroke_rect.stroke_width, 2.5);
    }

    #[test]
    fn test_assigned_image_goes_through_resolver() {
        let mark = ImageMark::new();
        let mut store = default_store();
        store.set(
            IMAGE,
            AttributeValue::String("https://example.com/cat.png".to_string()),
        );
        store.set(IMAGE_MODE, AttributeValue::Enum("stretch".to_string()));

        let root = mark
            .graphics(
                &store,
                &CartesianCoordinates,
                Point::default(),
                &PassthroughResolver,
            )
            .unwrap();
        let group = root.as_group().unwrap();
        let image = group.elements[0].as_group().unwrap().elements[0]
            .as_image()
            .unwrap();
        assert_eq!(image.src, "https://example.com/cat.png");
        assert_eq!(image.mode, ImageMode::Stretch);
    }

    #[test]
    fn test_offset_translates_corners() {
        let mark = ImageMark::new();
        let mut store = default_store();
        store.set(FILL, AttributeValue::Color(Some("#fff".to_string())));

        let root = mark
            .graphics(
                &store,
                &CartesianCoordinates,
                Point::new(100.0, 200.0),
                &PassthroughResolver,
            )
            .unwrap();
        let group = root.as_group().unwrap();
        let fill_rect = group.elements[0].as_rect().unwrap();
        assert_eq!(fill_rect.x1, 85.0);
        assert_eq!(fill_rect.y1, 175.0);
        assert_eq!(fill_rect.x2, 115.0);
        assert_eq!(fill_rect.y2, 225.0);

        let image_group = group.elements[1].as_group().unwrap();
        let transform = image_group.transform.expect("image subtree is placed");
        assert_eq!(transform.x, 100.0);
        assert_eq!(transform.y, 200.0);
    }

    #[test]
    fn test_polar_frame_shrinks_box_near_origin() {
        // x is angle, y is radius: the same angular width covers a shorter
        // distance at a smaller radius.
        let mark = ImageMark::new();
        let mut store = default_store();
        store.set_number(X1, 0.0);
        store.set_number(X2, 30.0);
        store.set_number(Y1, 40.0);
        store.set_number(Y2, 60.0);

        let cs = PolarCoordinates::new(Point::default());
        let root = mark
            .graphics(&store, &cs, Point::default(), &PassthroughResolver)
            .unwrap();
        let image = root.as_group().unwrap().elements[0]
            .as_group()
            .unwrap()
            .elements[0]
            .as_image()
            .unwrap();

        // Cartesian width would be 30; at radius 50 the chord is shorter
        // than the arc but much longer than the raw attribute difference.
        assert!(image.width > 20.0 && image.width < 30.0);
        assert_eq!(image.height, 20.0);
    }

    #[test]
    fn test_handle_inventory() {
        let mark = ImageMark::new();
        let store = default_store();
        let handles = mark.handles(&store);

        let lines: Vec<_> = handles
            .iter()
            .filter(|h| matches!(h, Handle::Line { .. }))
            .collect();
        let points: Vec<_> = handles
            .iter()
            .filter(|h| matches!(h, Handle::Point { .. }))
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(points.len(), 4);

        // Every line handle writes exactly one attribute; every point
        // handle writes exactly its two adjacent corner attributes.
        for line in &lines {
            assert_eq!(line.actions().len(), 1);
        }
        for point in &points {
            assert_eq!(point.actions().len(), 2);
        }
    }

    #[test]
    fn test_handle_spans_are_sorted_for_flipped_box() {
        let mark = ImageMark::new();
        let mut store = default_store();
        // Flip both axes
        store.set_number(X1, 15.0);
        store.set_number(X2, -15.0);
        store.set_number(Y1, 25.0);
        store.set_number(Y2, -25.0);

        for handle in mark.handles(&store) {
            if let Handle::Line { span, .. } = handle {
                assert!(span[0] <= span[1], "span must be min/max ordered");
            }
        }
    }

    #[test]
    fn test_snapping_guides() {
        let mark = ImageMark::new();
        let store = default_store();
        let guides = mark.snapping_guides(&store);
        assert_eq!(guides.len(), 6);

        let x_guides: Vec<_> = guides.iter().filter(|g| g.axis == Axis::X).collect();
        let y_guides: Vec<_> = guides.iter().filter(|g| g.axis == Axis::Y).collect();
        assert_eq!(x_guides.len(), 3);
        assert_eq!(y_guides.len(), 3);

        let cx_guide = guides.iter().find(|g| g.attribute == CX).unwrap();
        assert_eq!(cx_guide.value, 0.0);
    }

    #[test]
    fn test_drop_zones() {
        let mark = ImageMark::new();
        let store = default_store();
        let zones = mark.drop_zones(&store);
        assert_eq!(zones.len(), 2);

        let width_zone = zones.iter().find(|z| z.attribute == WIDTH).unwrap();
        assert_eq!(width_zone.data_kind, DataKind::Numerical);
        assert_eq!(width_zone.attribute_kind, AttributeKind::Number);
        assert!(width_zone.auto_range);
        // Top edge spans the full width at y2
        assert_eq!(width_zone.line.0.y, 25.0);
        assert_eq!(width_zone.line.1.y, 25.0);

        let height_zone = zones.iter().find(|z| z.attribute == HEIGHT).unwrap();
        // Left edge spans the full height at x1
        assert_eq!(height_zone.line.0.x, -15.0);
        assert_eq!(height_zone.line.1.x, -15.0);
    }

    #[test]
    fn test_link_anchors() {
        let mark = ImageMark::new();
        let store = default_store();
        let anchors = mark.link_anchors(&store);
        assert_eq!(anchors.len(), 8);

        let edges: Vec<_> = anchors.iter().filter(|a| a.points.len() == 2).collect();
        let midpoints: Vec<_> = anchors.iter().filter(|a| a.points.len() == 1).collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(midpoints.len(), 4);

        // The x1 edge group points outward in -x and binds both corners
        let left = &anchors[0];
        assert_eq!(left.direction, Vector::new(-1.0, 0.0));
        assert!(left.points.iter().all(|p| p.x_attribute == X1));

        // Midpoint anchors bind a corner attribute and a center attribute
        let top_mid = midpoints
            .iter()
            .find(|a| a.points[0].y_attribute == Y2)
            .unwrap();
        assert_eq!(top_mid.points[0].x_attribute, CX);
        assert_eq!(top_mid.direction, Vector::new(0.0, 1.0));
    }

    #[test]
    fn test_bounding_box_defaults_and_flip() {
        let mark = ImageMark::new();
        let mut store = default_store();

        let bb = mark.bounding_box(&store);
        assert_eq!(bb.cx, 0.0);
        assert_eq!(bb.cy, 0.0);
        assert_eq!(bb.width, 30.0);
        assert_eq!(bb.height, 50.0);
        assert_eq!(bb.rotation, 0.0);

        store.set_number(X1, 15.0);
        store.set_number(X2, -15.0);
        assert_eq!(mark.bounding_box(&store), bb);
    }

    #[test]
    fn test_degenerate_zero_size_box_still_draws() {
        let mark = ImageMark::new();
        let mut store = default_store();
        store.set_number(X1, 5.0);
        store.set_number(X2, 5.0);
        store.set_number(Y1, 5.0);
        store.set_number(Y2, 5.0);

        let root = mark
            .graphics(
                &store,
                &CartesianCoordinates,
                Point::default(),
                &PassthroughResolver,
            )
            .expect("degenerate box is not an error");
        let image = root.as_group().unwrap().elements[0]
            .as_group()
            .unwrap()
            .elements[0]
            .as_image()
            .unwrap();
        assert_eq!(image.width, 0.0);
        assert_eq!(image.height, 0.0);
    }
}
