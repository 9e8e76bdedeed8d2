use std::path::PathBuf;

use lead_magnets::builder::PdfBuilder;
use lead_magnets::fonts::FontSet;
use lead_magnets::magnets::playbook;
use lead_magnets::model::Face;
use lead_magnets::{wrap, GeneratorConfig, GlyphMetrics};

const FAMILY: &str = "DejaVuSans";

fn fonts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fonts")
}

fn dejavu() -> FontSet {
    FontSet::from_directory(&fonts_dir(), FAMILY, FAMILY).expect("load bundled DejaVu fonts")
}

#[test]
fn directory_fonts_replace_the_standard_set() {
    let fonts = dejavu();
    assert!(!fonts.is_standard());
    assert_eq!(fonts.describe(Face::Body), "DejaVuSans-Regular");
    assert_eq!(fonts.describe(Face::BodyBold), "DejaVuSans-Bold");
    assert_eq!(fonts.describe(Face::DisplayItalic), "DejaVuSans-Italic");
}

#[test]
fn truetype_widths_grow_with_text_and_scale_with_size() {
    let fonts = dejavu();
    let metrics = fonts.metrics(Face::Body);

    let short = metrics.width_of_text_at_size("Net", 11.0);
    let long = metrics.width_of_text_at_size("Network", 11.0);
    assert!(short > 0.0);
    assert!(long > short);
    assert_eq!(metrics.width_of_text_at_size("", 11.0), 0.0);

    let small = metrics.width_of_text_at_size("Network", 10.0);
    let large = metrics.width_of_text_at_size("Network", 20.0);
    assert!((large - 2.0 * small).abs() < 1e-9, "{} vs {}", small, large);

    let bold = fonts
        .metrics(Face::BodyBold)
        .width_of_text_at_size("Network", 11.0);
    assert!(bold > long);
}

#[test]
fn truetype_metrics_drive_wrapping() {
    let fonts = dejavu();
    let metrics = fonts.metrics(Face::Body);
    let text = "Your network is your net worth, but only when it is built on depth rather \
                than breadth.";

    let lines = wrap(text, &metrics, 11.0, 200.0);
    assert!(lines.len() > 1);
    assert_eq!(lines.join(" "), text);
    for line in &lines {
        assert!(metrics.width_of_text_at_size(line, 11.0) <= 200.0, "{:?}", line);
    }
}

#[test]
fn playbook_embeds_directory_fonts() {
    let standard = PdfBuilder::new(playbook::document())
        .render()
        .expect("render with standard fonts");
    let embedded = PdfBuilder::new(playbook::document())
        .with_fonts(dejavu())
        .render()
        .expect("render with DejaVu fonts");

    assert_eq!(embedded.page_count, 28);
    assert!(embedded.bytes.starts_with(b"%PDF-"));
    assert!(embedded.bytes.len() > standard.bytes.len());
}

#[test]
fn config_loads_fonts_from_an_explicit_directory() {
    let config = GeneratorConfig::default()
        .with_fonts_dir(Some(fonts_dir()))
        .with_families(FAMILY, FAMILY);

    let fonts = config.load_fonts().expect("load configured fonts");
    assert_eq!(fonts.describe(Face::Display), "DejaVuSans-Bold");
}
