//! SVG rendering of resolved primitive trees
//!
//! The renderer consumes the primitive tree a mark resolves to and emits an
//! SVG document framed by the mark's bounding box. [`SvgConfig`] controls
//! the document shape: how much margin the viewBox adds around the bounding
//! box, whether a canvas background is painted behind the mark, and whether
//! the output is a standalone file or a compact fragment for embedding.

mod svg;

pub use svg::render_svg;

/// Document options for [`render_svg`]
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Margin added on every side when deriving the viewBox from the mark's
    /// bounding box
    pub padding: f64,

    /// Canvas color painted behind the mark (a theme `canvas-background`
    /// token, typically); None leaves the canvas transparent
    pub background: Option<String>,

    /// Emit the XML declaration so the file opens on its own
    pub standalone: bool,

    /// Emit one unindented line instead of a pretty-printed document
    pub compact: bool,

    /// Prefix for the class names attached to emitted elements, so host
    /// stylesheets can scope their rules
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            padding: 20.0,
            background: None,
            standalone: true,
            compact: false,
            class_prefix: Some("cm-".to_string()),
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Single-line output without the XML declaration, for inlining into a
    /// host document
    pub fn embedded(mut self) -> Self {
        self.standalone = false;
        self.compact = true;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
