//! Interactive affordance geometry
//!
//! Everything in this module is ephemeral: handles, guides, drop zones, and
//! link anchors are recomputed from the attribute store every frame and never
//! persist relationships themselves. Each affordance reads current attribute
//! values to place itself and names the attribute(s) it writes back, so the
//! editor can route a gesture to exactly the right writes.

use crate::attrs::{AttributeKind, AttributeStore};
use crate::geometry::{Point, Vector};

/// Axis a guide or line handle is aligned with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One attribute write performed when a handle is dragged: take the named
/// axis of the drag target and store it into `attribute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleAction {
    pub source: Axis,
    pub attribute: &'static str,
}

impl HandleAction {
    pub const fn new(source: Axis, attribute: &'static str) -> Self {
        Self { source, attribute }
    }
}

/// A draggable affordance on the canvas.
///
/// A handle never embeds the value being edited; it carries its current
/// placement plus the write actions to apply when dragged.
#[derive(Debug, Clone, PartialEq)]
pub enum Handle {
    /// An axis-aligned line at `value`, spanning `span` on the other axis
    Line {
        axis: Axis,
        value: f64,
        span: [f64; 2],
        actions: Vec<HandleAction>,
    },
    /// A point handle (e.g., a box corner)
    Point {
        x: f64,
        y: f64,
        actions: Vec<HandleAction>,
    },
}

impl Handle {
    pub fn actions(&self) -> &[HandleAction] {
        match self {
            Handle::Line { actions, .. } => actions,
            Handle::Point { actions, .. } => actions,
        }
    }

    /// Apply a drag to `target`, writing exactly the attributes this handle
    /// names and nothing else. Edits are authoritative overrides: the host
    /// re-solves afterwards so derived attributes catch up.
    pub fn apply(&self, store: &mut AttributeStore, target: Point) {
        for action in self.actions() {
            let value = match action.source {
                Axis::X => target.x,
                Axis::Y => target.y,
            };
            store.set_number(action.attribute, value);
        }
    }
}

/// An axis-aligned reference value the editor snaps other marks against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnappingGuide {
    pub axis: Axis,
    pub value: f64,
    /// The attribute this guide snaps against
    pub attribute: &'static str,
}

impl SnappingGuide {
    pub const fn new(axis: Axis, value: f64, attribute: &'static str) -> Self {
        Self {
            axis,
            value,
            attribute,
        }
    }
}

/// Kind of data a drop zone accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Numerical,
}

/// A line segment on the shape boundary that accepts a data-field drop and
/// binds it to an attribute through the host's scale-inference mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct DropZone {
    pub line: (Point, Point),
    pub data_kind: DataKind,
    /// Attribute the dropped field should drive
    pub attribute: &'static str,
    pub attribute_kind: AttributeKind,
    /// Let scale inference pick the output range automatically
    pub auto_range: bool,
}

/// One connectable point, bound to the attribute pair it corresponds to so
/// a link can follow the mark when it moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    pub x: f64,
    pub y: f64,
    pub x_attribute: &'static str,
    pub y_attribute: &'static str,
}

/// A group of anchor points along one edge (or a single midpoint), with the
/// outward direction normal to that edge.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAnchor {
    pub points: Vec<AnchorPoint>,
    pub direction: Vector,
}
