//! Renderable primitive vocabulary
//!
//! Marks resolve their attribute state into this small tree of primitives.
//! The tree is the boundary between mark logic and any concrete backend: the
//! SVG renderer in this crate consumes it, and a host editor can walk it to
//! drive a canvas instead. Colors are plain CSS color strings.

use crate::geometry::Transform;

/// Line join used when stroking rectangle outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// How an image is fitted into its target box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    /// Scale uniformly so the whole image is visible, padding as needed
    Letterbox,
    /// Scale uniformly to cover the box, cropping as needed
    Fill,
    /// Scale each axis independently to match the box exactly
    Stretch,
}

impl ImageMode {
    pub fn as_tag(&self) -> &'static str {
        match self {
            ImageMode::Letterbox => "letterbox",
            ImageMode::Fill => "fill",
            ImageMode::Stretch => "stretch",
        }
    }

    /// Parse the enum-attribute tag; unknown tags fall back to letterbox
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "fill" => ImageMode::Fill,
            "stretch" => ImageMode::Stretch,
            _ => ImageMode::Letterbox,
        }
    }
}

/// A rectangle given by two opposite corners, in any order
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub line_join: LineJoin,
}

impl Rect {
    /// Filled rectangle with no stroke
    pub fn filled(x1: f64, y1: f64, x2: f64, y2: f64, fill: impl Into<String>) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            fill: Some(fill.into()),
            stroke: None,
            stroke_width: 0.0,
            line_join: LineJoin::Miter,
        }
    }

    /// Unfilled rectangle outline
    pub fn stroked(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: impl Into<String>,
        stroke_width: f64,
    ) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            fill: None,
            stroke: Some(stroke.into()),
            stroke_width,
            line_join: LineJoin::Miter,
        }
    }
}

/// An image placed in a local box
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Displayable source (URL or data URI)
    pub src: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub mode: ImageMode,
}

/// A group of primitives with an optional local transform and group opacity
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub transform: Option<Transform>,
    pub opacity: f64,
    pub elements: Vec<Element>,
}

impl Group {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            transform: None,
            opacity: 1.0,
            elements,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// One node in the renderable primitive tree
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Group(Group),
    Rect(Rect),
    Image(Image),
}

impl Element {
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Element::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Element::Rect(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Element::Image(i) => Some(i),
            _ => None,
        }
    }
}
