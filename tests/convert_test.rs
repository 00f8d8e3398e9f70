//! Integration tests for conversion profiles and PDF rendering.
//!
//! Rendering tests need a real TTF family on disk; they resolve one through
//! the crate's own font search and return early when none is installed.

use std::fs;
use std::path::Path;

use topdf::render::load_font_family;
use topdf::{
    Block, ConversionProfile, ConvertOptions, Document, LayoutEngine, PdfEngine, RenderOptions,
    Topdf,
};

fn fonts_available() -> bool {
    load_font_family(None, None).is_ok()
}

#[test]
fn test_profile_conventional_names() {
    let dir = Path::new("docs");
    assert_eq!(
        ConversionProfile::Basic.input_path(dir),
        Path::new("docs/report_a4.html")
    );
    assert_eq!(
        ConversionProfile::Full.input_path(dir),
        Path::new("docs/report_full_a4.html")
    );
    assert_eq!(ConversionProfile::Basic.name(), "basic");
    assert_eq!(ConversionProfile::Full.name(), "full");
}

#[test]
fn test_output_path_derived_next_to_input() {
    let input = ConversionProfile::Full.input_path(Path::new("docs"));
    let output = topdf::derive_output_path(&input);
    assert_eq!(output, Path::new("docs/report_full_a4.pdf"));
}

#[test]
fn test_convert_file_writes_pdf() {
    if !fonts_available() {
        eprintln!("skipping: no TTF font family installed");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.html");
    let output = dir.path().join("report.pdf");
    fs::write(
        &input,
        "<h1>Rapport</h1><p>Introduction</p><p>Du texte ordinaire.</p>",
    )
    .unwrap();

    let summary = topdf::convert_file(&input, &output, &ConvertOptions::full()).unwrap();

    assert_eq!(summary.output, output);
    assert_eq!(summary.block_count, 3);
    assert_eq!(summary.title.as_deref(), Some("Rapport"));

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_render_zero_blocks_still_produces_valid_output() {
    if !fonts_available() {
        eprintln!("skipping: no TTF font family installed");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.html");
    let output = dir.path().join("empty.pdf");
    fs::write(&input, "<div>   </div><p>\n</p>").unwrap();

    let summary = topdf::convert_file(&input, &output, &ConvertOptions::basic()).unwrap();
    assert_eq!(summary.block_count, 0);

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_engine_renders_embedded_line_breaks() {
    if !fonts_available() {
        eprintln!("skipping: no TTF font family installed");
        return;
    }

    // Multi-line body content must stay multi-line, not be joined.
    let document = Document::from_blocks(vec![
        Block::title("Listing"),
        Block::body("first line\nsecond line"),
    ]);

    let mut bytes = Vec::new();
    PdfEngine::new()
        .render(&document, &RenderOptions::full(), &mut bytes)
        .unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_builder_convert_roundtrip() {
    if !fonts_available() {
        eprintln!("skipping: no TTF font family installed");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("page.html");
    let output = dir.path().join("page.pdf");
    fs::write(&input, "<div>One</div><div>Two</div>").unwrap();

    let summary = Topdf::new().convert(&input, &output).unwrap();
    assert_eq!(summary.block_count, 2);
    assert!(output.exists());
}

#[test]
fn test_two_runs_classify_identically() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("stable.html");
    fs::write(
        &input,
        "<h1>Titre</h1><p>Table des matières</p><p>Corps du texte.</p>",
    )
    .unwrap();

    let html = fs::read_to_string(&input).unwrap();
    let options = ConvertOptions::full();
    let first = topdf::to_document(&html, &options);
    let second = topdf::to_document(&html, &options);

    assert_eq!(first.blocks, second.blocks);
}
