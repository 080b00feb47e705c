//! Core geometric types shared by marks, interaction affordances, and renderers

/// A 2D point in chart coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A 2D direction vector (e.g., the outward normal of a link anchor)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Local-to-global placement descriptor for a locally drawn subtree.
///
/// Angle is in degrees, clockwise positive (SVG convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl Transform {
    pub fn translation(x: f64, y: f64) -> Self {
        Self { x, y, angle: 0.0 }
    }

    /// True when the rotation component would produce no visible change
    pub fn is_axis_aligned(&self) -> bool {
        self.angle.abs() < f64::EPSILON
    }
}

/// An oriented bounding rectangle described by center, size, and rotation.
///
/// Marks report their spatial extent in this form so the editor can hit-test
/// and frame them without knowing mark internals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees (clockwise positive); axis-aligned marks report 0
    pub rotation: f64,
}

impl BoundingBox {
    /// Build an axis-aligned box from two opposite corners.
    ///
    /// Corner ordering is not assumed: a user can drag a corner past its
    /// opposite, and the resulting flipped box must still measure correctly.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            cx: (x1 + x2) / 2.0,
            cy: (y1 + y2) / 2.0,
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
            rotation: 0.0,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}
