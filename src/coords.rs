//! Coordinate system port
//!
//! Marks resolve their graphics inside an ambient coordinate system owned by
//! the host chart. The system maps mark-local (x, y) pairs into the plot
//! frame and supplies a local transform for subtrees drawn around a center
//! point. Rendering must stay correct under non-Cartesian systems, which is
//! why box sizes are measured between transformed edge midpoints rather than
//! taken from raw attribute differences.

use crate::geometry::{Point, Transform};

/// Mapping from a mark's local geometric space to the rendered space
pub trait CoordinateSystem {
    /// Transform a local (x, y) pair into the plot frame
    fn transform_point(&self, x: f64, y: f64) -> Point;

    /// Placement transform for a locally drawn subtree centered at (cx, cy)
    fn local_transform(&self, cx: f64, cy: f64) -> Transform;
}

/// The ordinary Cartesian frame: points pass through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct CartesianCoordinates;

impl CoordinateSystem for CartesianCoordinates {
    fn transform_point(&self, x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn local_transform(&self, cx: f64, cy: f64) -> Transform {
        Transform::translation(cx, cy)
    }
}

/// A polar frame interpreting local x as angle (degrees, clockwise from
/// twelve o'clock) and local y as radius from `origin`.
///
/// Local subtrees are rotated to the tangent of their angular position, so a
/// mark placed at 90 degrees reads sideways along the ring.
#[derive(Debug, Clone, Copy)]
pub struct PolarCoordinates {
    pub origin: Point,
}

impl PolarCoordinates {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }
}

impl CoordinateSystem for PolarCoordinates {
    fn transform_point(&self, x: f64, y: f64) -> Point {
        let radians = x.to_radians();
        Point::new(
            self.origin.x + y * radians.sin(),
            self.origin.y - y * radians.cos(),
        )
    }

    fn local_transform(&self, cx: f64, cy: f64) -> Transform {
        let position = self.transform_point(cx, cy);
        Transform {
            x: position.x,
            y: position.y,
            angle: cx,
        }
    }
}
