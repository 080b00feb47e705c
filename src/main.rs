//! Chartmark demo CLI
//!
//! Builds a single mark instance from command-line flags, runs a solve
//! pass, and prints the rendered SVG to stdout.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use chartmark::attrs::{AttributeStore, AttributeValue, SolverRole};
use chartmark::coords::{CartesianCoordinates, PolarCoordinates};
use chartmark::geometry::{BoundingBox, Point};
use chartmark::marks::{MarkClass, MarkRegistry};
use chartmark::renderer::{render_svg, SvgConfig};
use chartmark::resources::{data_uri, PassthroughResolver};
use chartmark::solver::solve_mark;
use chartmark::theme::Theme;

#[derive(Parser)]
#[command(name = "chartmark")]
#[command(about = "Render a single chart mark to SVG")]
struct Cli {
    /// Mark type to create (see --list-marks)
    #[arg(short, long, default_value = "image")]
    mark: String,

    /// Box width
    #[arg(long, default_value_t = 30.0)]
    width: f64,

    /// Box height
    #[arg(long, default_value_t = 50.0)]
    height: f64,

    /// Image file to embed, or a URL / data URI (image mark only)
    #[arg(short, long)]
    image: Option<String>,

    /// Fill color ("none" to disable, default: theme mark-fill)
    #[arg(long)]
    fill: Option<String>,

    /// Stroke color ("none" to disable, default: theme mark-stroke)
    #[arg(long)]
    stroke: Option<String>,

    /// Theme file for style tokens (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Render inside a polar frame (x = angle, y = radius)
    #[arg(long)]
    polar: bool,

    /// List registered mark types and exit
    #[arg(long)]
    list_marks: bool,

    /// Dump solved attribute values to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let registry = MarkRegistry::with_builtins();

    if cli.list_marks {
        for name in registry.names() {
            let mark = registry
                .create(name)
                .expect("listed names are constructible");
            println!("{}  ({})", name, mark.metadata().display_name);
        }
        return ExitCode::SUCCESS;
    }

    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("error loading theme '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Theme::default(),
    };

    let mark = match registry.create(&cli.mark) {
        Ok(mark) => mark,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("available mark types: {}", registry.names().join(", "));
            return ExitCode::FAILURE;
        }
    };

    let mut store = AttributeStore::new();
    mark.initialize_state(&mut store);
    store.set_number("x1", -cli.width / 2.0);
    store.set_number("x2", cli.width / 2.0);
    store.set_number("y1", -cli.height / 2.0);
    store.set_number("y2", cli.height / 2.0);

    apply_color(&mut store, "fill", cli.fill.as_deref(), &theme, "mark-fill");
    apply_color(
        &mut store,
        "stroke",
        cli.stroke.as_deref(),
        &theme,
        "mark-stroke",
    );

    if let Some(image) = &cli.image {
        if store.contains("image") {
            match image_source(image) {
                Ok(src) => store.set("image", AttributeValue::String(src)),
                Err(e) => {
                    eprintln!("error reading image '{}': {}", image, e);
                    return ExitCode::FAILURE;
                }
            }
        } else {
            eprintln!("note: mark type '{}' has no image attribute", cli.mark);
        }
    }

    if let Err(e) = solve_mark(mark.as_ref(), "mark", &mut store) {
        eprintln!("solve error: {}", e);
        return ExitCode::FAILURE;
    }

    if cli.debug {
        eprintln!("=== Solved attributes ===");
        for spec in mark.schema() {
            if matches!(spec.role, SolverRole::Primary | SolverRole::Derived) {
                eprintln!("{:>12} = {:.2}", spec.name, store.number(spec.name));
            }
        }
        eprintln!("=========================");
    }

    let config =
        SvgConfig::default().with_background(theme.resolve_or_default("canvas-background"));
    let svg = render(mark.as_ref(), &store, cli.polar, &config);
    match svg {
        Some(svg) => {
            println!("{}", svg);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("mark is not visible; nothing to render");
            ExitCode::FAILURE
        }
    }
}

/// Apply a color flag, falling back to the theme token; "none" clears it
fn apply_color(
    store: &mut AttributeStore,
    attribute: &str,
    flag: Option<&str>,
    theme: &Theme,
    token: &str,
) {
    let value = match flag {
        Some("none") => None,
        Some(color) => Some(color.to_string()),
        None => Some(theme.resolve_or_default(token)),
    };
    store.set(attribute, AttributeValue::Color(value));
}

/// Turn the --image argument into a displayable source: local files are
/// embedded as data URIs, anything else passes through
fn image_source(arg: &str) -> Result<String, std::io::Error> {
    let path = Path::new(arg);
    if path.is_file() {
        let bytes = fs::read(path)?;
        Ok(data_uri(mime_for(path), &bytes))
    } else {
        Ok(arg.to_string())
    }
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn render(
    mark: &dyn MarkClass,
    store: &AttributeStore,
    polar: bool,
    config: &SvgConfig,
) -> Option<String> {
    if polar {
        // Push the box out to a readable radius; the viewBox must cover the
        // transformed geometry rather than the attribute-space bounds.
        let cs = PolarCoordinates::new(Point::default());
        let offset = Point::new(0.0, 150.0);
        let root = mark.graphics(store, &cs, offset, &PassthroughResolver)?;
        let bounds = BoundingBox {
            cx: 0.0,
            cy: 0.0,
            width: 400.0,
            height: 400.0,
            rotation: 0.0,
        };
        Some(render_svg(&root, &bounds, config))
    } else {
        let root = mark.graphics(
            store,
            &CartesianCoordinates,
            Point::default(),
            &PassthroughResolver,
        )?;
        let bounds = mark.bounding_box(store);
        Some(render_svg(&root, &bounds, config))
    }
}
