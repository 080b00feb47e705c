//! Chartmark - a declarative mark abstraction for chart authoring
//!
//! A mark is a polymorphic shape type that publishes its geometric
//! attributes and the constraints relating them to a shared layout solver,
//! resolves attribute state into renderable primitives inside an arbitrary
//! coordinate system, and exposes the interactive affordances (handles,
//! snapping guides, drop zones, link anchors) a visual editor needs.
//!
//! # Example
//!
//! ```rust
//! use chartmark::attrs::AttributeStore;
//! use chartmark::marks::{ImageMark, MarkClass};
//! use chartmark::renderer::SvgConfig;
//!
//! let mark = ImageMark::new();
//! let mut store = AttributeStore::new();
//! mark.initialize_state(&mut store);
//!
//! let svg = chartmark::render_mark_svg(&mark, &store, &SvgConfig::default()).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod attrs;
pub mod coords;
pub mod geometry;
pub mod graphics;
pub mod interaction;
pub mod marks;
pub mod renderer;
pub mod resources;
pub mod solver;
pub mod theme;

pub use attrs::{AttributeKind, AttributeStore, AttributeValue};
pub use coords::{CartesianCoordinates, CoordinateSystem, PolarCoordinates};
pub use geometry::{BoundingBox, Point, Transform, Vector};
pub use marks::{ImageMark, MarkClass, MarkRegistry, RectMark};
pub use renderer::{render_svg, SvgConfig};
pub use resources::{PassthroughResolver, ResourceResolver};
pub use solver::{solve_mark, ConstraintSolver, SolveError, Strength};
pub use theme::{Theme, ThemeError};

/// Render one mark instance to a standalone SVG document.
///
/// Convenience wrapper for hosts without their own coordinate system or
/// resource store: resolves graphics in a Cartesian frame with a
/// passthrough resolver and frames the viewBox with the mark's bounding
/// box. Returns None when the mark skips drawing (visibility off).
pub fn render_mark_svg(
    mark: &dyn MarkClass,
    store: &AttributeStore,
    config: &SvgConfig,
) -> Option<String> {
    let root = mark.graphics(
        store,
        &CartesianCoordinates,
        Point::default(),
        &PassthroughResolver,
    )?;
    let bounds = mark.bounding_box(store);
    Some(render_svg(&root, &bounds, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_image_mark() {
        let mark = ImageMark::new();
        let mut store = AttributeStore::new();
        mark.initialize_state(&mut store);

        let svg = render_mark_svg(&mark, &store, &SvgConfig::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("<image"));
        assert!(svg.contains("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_render_invisible_mark_is_none() {
        let mark = ImageMark::new();
        let mut store = AttributeStore::new();
        mark.initialize_state(&mut store);
        store.set("visible", AttributeValue::Boolean(false));

        assert!(render_mark_svg(&mark, &store, &SvgConfig::default()).is_none());
    }
}
