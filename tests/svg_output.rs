//! End-to-end SVG output tests: mark state in, document text out.

use pretty_assertions::assert_eq;

use chartmark::attrs::{AttributeStore, AttributeValue};
use chartmark::marks::{ImageMark, MarkClass, RectMark};
use chartmark::render_mark_svg;
use chartmark::renderer::SvgConfig;

fn styled_store(mark: &dyn MarkClass) -> AttributeStore {
    let mut store = AttributeStore::new();
    mark.initialize_state(&mut store);
    store.set("fill", AttributeValue::Color(Some("#e3f2fd".to_string())));
    store.set("stroke", AttributeValue::Color(Some("#1565c0".to_string())));
    store
}

#[test]
fn test_rect_mark_document() {
    let mark = RectMark::new();
    let store = styled_store(&mark);
    let config = SvgConfig::default().without_class_prefix();

    let svg = render_mark_svg(&mark, &store, &config).expect("visible mark renders");
    let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"-35 -45 70 90\">
  <g class=\"group\">
    <rect class=\"rect\" x=\"-15\" y=\"-25\" width=\"30\" height=\"50\" fill=\"#e3f2fd\" stroke=\"#1565c0\" stroke-width=\"1\" stroke-linejoin=\"miter\"/>
  </g>
</svg>
";
    assert_eq!(svg, expected);
}

#[test]
fn test_image_mark_paint_order() {
    let mark = ImageMark::new();
    let store = styled_store(&mark);

    let svg = render_mark_svg(&mark, &store, &SvgConfig::default()).unwrap();
    let fill = svg.find("fill=\"#e3f2fd\"").expect("fill rect present");
    let image = svg.find("<image").expect("image present");
    let stroke = svg.find("stroke=\"#1565c0\"").expect("stroke rect present");
    assert!(fill < image, "fill renders under the image");
    assert!(image < stroke, "stroke renders over the image");
}

#[test]
fn test_default_image_mark_embeds_placeholder() {
    let mark = ImageMark::new();
    let mut store = AttributeStore::new();
    mark.initialize_state(&mut store);

    let svg = render_mark_svg(&mark, &store, &SvgConfig::default()).unwrap();
    assert!(svg.contains("href=\"data:image/svg+xml;base64,"));
    assert!(svg.contains("preserveAspectRatio=\"xMidYMid meet\""));
}

#[test]
fn test_image_url_with_query_string_stays_well_formed() {
    let mark = ImageMark::new();
    let mut store = AttributeStore::new();
    mark.initialize_state(&mut store);
    store.set(
        "image",
        AttributeValue::String("https://example.com/a.png?a=1&b=2".to_string()),
    );

    let svg = render_mark_svg(&mark, &store, &SvgConfig::default()).unwrap();
    assert!(svg.contains("a=1&amp;b=2"));
    assert!(!svg.contains("a=1&b=2"));
}

#[test]
fn test_invisible_mark_renders_nothing() {
    let mark = RectMark::new();
    let mut store = styled_store(&mark);
    store.set("visible", AttributeValue::Boolean(false));
    assert!(render_mark_svg(&mark, &store, &SvgConfig::default()).is_none());
}

#[test]
fn test_embedded_output_with_custom_prefix() {
    let mark = RectMark::new();
    let store = styled_store(&mark);
    let config = SvgConfig::default().embedded().with_class_prefix("chart-");

    let svg = render_mark_svg(&mark, &store, &config).unwrap();
    assert!(!svg.contains('\n'));
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("class=\"chart-rect\""));
}

#[test]
fn test_flipped_box_renders_normalized() {
    let mark = RectMark::new();
    let mut store = styled_store(&mark);
    store.set_number("x1", 15.0);
    store.set_number("x2", -15.0);

    let svg = render_mark_svg(&mark, &store, &SvgConfig::default()).unwrap();
    assert!(svg.contains("x=\"-15\""));
    assert!(svg.contains("width=\"30\""));
    // The flipped viewBox is identical to the unflipped one
    assert!(svg.contains("viewBox=\"-35 -45 70 90\""));
}
