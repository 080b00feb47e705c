//! SVG generation from resolved primitive trees

use crate::geometry::{BoundingBox, Transform};
use crate::graphics::{Element, Group, Image, ImageMode, Rect};

use super::SvgConfig;

/// Render a primitive tree to an SVG document.
///
/// `bounds` frames the viewBox; the tree is emitted as-is inside it.
pub fn render_svg(root: &Element, bounds: &BoundingBox, config: &SvgConfig) -> String {
    let mut writer = SvgWriter::new(config.clone());
    writer.open_document(bounds);
    writer.write_element(root);
    writer.close_document();
    writer.finish()
}

struct SvgWriter {
    config: SvgConfig,
    out: String,
    indent: usize,
}

impl SvgWriter {
    fn new(config: SvgConfig) -> Self {
        Self {
            config,
            out: String::new(),
            indent: 0,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn push_line(&mut self, line: &str) {
        if self.config.compact {
            self.out.push_str(line);
        } else {
            self.out.push_str(&"  ".repeat(self.indent));
            self.out.push_str(line);
            self.out.push('\n');
        }
    }

    fn open_document(&mut self, bounds: &BoundingBox) {
        if self.config.standalone {
            self.push_line(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        }
        let pad = self.config.padding;
        let min_x = bounds.cx - bounds.width / 2.0 - pad;
        let min_y = bounds.cy - bounds.height / 2.0 - pad;
        let width = bounds.width + 2.0 * pad;
        let height = bounds.height + 2.0 * pad;
        self.push_line(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            min_x, min_y, width, height
        ));
        self.indent += 1;

        if let Some(background) = self.config.background.clone() {
            self.push_line(&format!(
                r#"<rect class="{}canvas" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                self.prefix(),
                min_x,
                min_y,
                width,
                height,
                escape_xml(&background)
            ));
        }
    }

    fn close_document(&mut self) {
        self.indent -= 1;
        self.push_line("</svg>");
    }

    fn finish(self) -> String {
        self.out
    }

    fn write_element(&mut self, element: &Element) {
        match element {
            Element::Group(group) => self.write_group(group),
            Element::Rect(rect) => self.write_rect(rect),
            Element::Image(image) => self.write_image(image),
        }
    }

    fn write_group(&mut self, group: &Group) {
        let mut attrs = format!(r#" class="{}group""#, self.prefix());
        if let Some(transform) = &group.transform {
            attrs.push_str(&format!(r#" transform="{}""#, transform_value(transform)));
        }
        if group.opacity != 1.0 {
            attrs.push_str(&format!(r#" opacity="{}""#, group.opacity));
        }
        self.push_line(&format!("<g{}>", attrs));
        self.indent += 1;
        for child in &group.elements {
            self.write_element(child);
        }
        self.indent -= 1;
        self.push_line("</g>");
    }

    fn write_rect(&mut self, rect: &Rect) {
        // Corners arrive in attribute order, which may be flipped
        let x = rect.x1.min(rect.x2);
        let y = rect.y1.min(rect.y2);
        let width = (rect.x2 - rect.x1).abs();
        let height = (rect.y2 - rect.y1).abs();

        let mut attrs = format!(
            r#" x="{}" y="{}" width="{}" height="{}""#,
            x, y, width, height
        );
        match &rect.fill {
            Some(fill) => attrs.push_str(&format!(r#" fill="{}""#, escape_xml(fill))),
            None => attrs.push_str(r#" fill="none""#),
        }
        if let Some(stroke) = &rect.stroke {
            attrs.push_str(&format!(
                r#" stroke="{}" stroke-width="{}" stroke-linejoin="{}""#,
                escape_xml(stroke),
                rect.stroke_width,
                rect.line_join.as_str()
            ));
        }
        self.push_line(&format!(
            r#"<rect class="{}rect"{}/>"#,
            self.prefix(),
            attrs
        ));
    }

    fn write_image(&mut self, image: &Image) {
        self.push_line(&format!(
            r#"<image class="{}image" href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="{}"/>"#,
            self.prefix(),
            escape_xml(&image.src),
            image.x,
            image.y,
            image.width,
            image.height,
            aspect_ratio_value(image.mode)
        ));
    }
}

fn transform_value(transform: &Transform) -> String {
    if transform.is_axis_aligned() {
        format!("translate({} {})", transform.x, transform.y)
    } else {
        format!(
            "translate({} {}) rotate({})",
            transform.x, transform.y, transform.angle
        )
    }
}

fn aspect_ratio_value(mode: ImageMode) -> &'static str {
    match mode {
        ImageMode::Letterbox => "xMidYMid meet",
        ImageMode::Fill => "xMidYMid slice",
        ImageMode::Stretch => "none",
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
