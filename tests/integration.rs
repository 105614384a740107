//! Integration tests for the report rendering pipeline.
//!
//! These tests exercise the full path from report input to PDF output.
//! They verify:
//! - JSON deserialization of the capture-app format
//! - The template produces the right pages in the right order
//! - Page breaks never push a block past the bottom margin
//! - Image pages (including failed images) are always emitted
//! - PDF output is structurally valid and deterministic

use std::collections::HashMap;

use inspecta::blocks::{narrative, recommendations};
use inspecta::catalog;
use inspecta::font::FontContext;
use inspecta::image_loader::{ByteSource, ImageError, ReferenceScheme};
use inspecta::layout::fit::{fit, BoundingBox};
use inspecta::layout::{Document, DrawCommand, PageGeometry};
use inspecta::model::{AssessmentReport, BuildingInfo, DefectCategory, RiskLevel};
use inspecta::template::{layout_report, CancelToken};
use inspecta::text;
use inspecta::ReportError;

// ─── Helpers ────────────────────────────────────────────────────

/// In-memory photo store keyed by full reference.
struct MemoryPhotos(HashMap<String, Vec<u8>>);

impl MemoryPhotos {
    fn empty() -> Self {
        Self(HashMap::new())
    }

    fn with(mut self, reference: &str, bytes: Vec<u8>) -> Self {
        self.0.insert(reference.to_string(), bytes);
        self
    }
}

impl ByteSource for MemoryPhotos {
    fn fetch(&self, _: ReferenceScheme, reference: &str) -> Result<Vec<u8>, ImageError> {
        self.0
            .get(reference)
            .cloned()
            .ok_or_else(|| ImageError::Unavailable(format!("no such photo: {}", reference)))
    }
}

fn jpeg_fixture(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new(&mut buf);
    image::ImageEncoder::write_image(encoder, img.as_raw(), width, height, image::ColorType::Rgb8)
        .unwrap();
    buf
}

fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([20, 90, 200, 255]));
    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    image::ImageEncoder::write_image(encoder, img.as_raw(), width, height, image::ColorType::Rgba8)
        .unwrap();
    buf
}

fn layout(report: &AssessmentReport, photos: &MemoryPhotos) -> Document {
    layout_report(
        report,
        &FontContext::new(),
        photos,
        PageGeometry::default(),
        &CancelToken::new(),
    )
    .unwrap()
}

fn page_texts(doc: &Document, index: usize) -> Vec<String> {
    doc.pages()[index].texts().map(str::to_string).collect()
}

fn all_texts(doc: &Document) -> Vec<String> {
    (0..doc.page_count()).flat_map(|i| page_texts(doc, i)).collect()
}

fn assert_valid_pdf(bytes: &[u8]) {
    assert!(bytes.starts_with(b"%PDF-1.7"), "PDF should start with header");
    assert!(
        bytes.windows(5).any(|w| w == b"%%EOF"),
        "PDF should end with %%EOF"
    );
    assert!(bytes.windows(4).any(|w| w == b"xref"), "PDF should have xref");
    assert!(
        bytes.windows(7).any(|w| w == b"trailer"),
        "PDF should have trailer"
    );
}

fn full_report() -> AssessmentReport {
    AssessmentReport {
        name: "Riverside Apartments".into(),
        date: "March 3, 2025".into(),
        overall_risk: RiskLevel::High,
        total_issues: 14,
        crack_high: 3,
        crack_moderate: 2,
        crack_low: 5,
        paint: 3,
        algae: 1,
        building: BuildingInfo {
            building_type: "Residential".into(),
            material: "Reinforced concrete".into(),
            construction_year: "1987".into(),
            floors: "6".into(),
            foundation: "Pile".into(),
            environment: "Coastal".into(),
            renovation_year: "2009".into(),
            occupancy: "Fully occupied".into(),
            environmental_risks: "Salt spray, typhoons".into(),
            previous_issues: "Spalling on the east balconies".into(),
            notes: "Balconies on levels 4 to 6 were inspected with binoculars. ".repeat(30),
        },
        image_urls: vec![],
    }
}

// ─── Pagination ─────────────────────────────────────────────────

#[test]
fn test_minimal_report_is_one_page() {
    let doc = layout(&AssessmentReport::default(), &MemoryPhotos::empty());
    assert_eq!(doc.page_count(), 1);
}

#[test]
fn test_every_placement_fits_above_bottom_margin() {
    let doc = layout(&full_report(), &MemoryPhotos::empty());
    assert!(doc.page_count() >= 2, "long notes should spill onto page 2");
    let limit = doc.geometry().content_bottom();
    for placement in doc.placements() {
        assert!(
            placement.cursor_before + placement.estimate <= limit,
            "{:?} crosses the bottom margin",
            placement
        );
    }
}

#[test]
fn test_long_building_value_never_overflows() {
    let mut report = full_report();
    report.building.previous_issues = "Water seepage reported near stairwell. ".repeat(250);
    let doc = layout(&report, &MemoryPhotos::empty());
    let limit = doc.geometry().content_bottom();
    for placement in doc.placements() {
        assert!(
            placement.cursor_before + placement.estimate <= limit,
            "{:?} crosses the bottom margin",
            placement
        );
    }
    let text = all_texts(&doc).join(" ");
    assert_eq!(text.matches("stairwell").count(), 250);
}

#[test]
fn test_placements_are_forward_only() {
    let doc = layout(&full_report(), &MemoryPhotos::empty());
    let mut last = (0usize, 0u32);
    for p in doc.placements() {
        if p.page_index == last.0 {
            assert!(p.cursor_before >= last.1, "cursor moved up on page {}", p.page_index);
        } else {
            assert!(p.page_index > last.0);
        }
        last = (p.page_index, p.cursor_before);
    }
}

#[test]
fn test_block_order_follows_template() {
    let doc = layout(&full_report(), &MemoryPhotos::empty());
    let mut blocks: Vec<&str> = doc.placements().iter().map(|p| p.block).collect();
    blocks.dedup();
    assert_eq!(
        blocks,
        vec![
            "header",
            "risk badge",
            "summary",
            "building info",
            "building row",
            "notes",
            "notes line",
            "detection summary",
            "recommendations",
            "recommendation",
        ]
    );
}

#[test]
fn test_building_info_skipped_when_absent() {
    let doc = layout(&AssessmentReport::default(), &MemoryPhotos::empty());
    assert!(doc.placements().iter().all(|p| p.block != "building info"));
    assert!(!all_texts(&doc).iter().any(|t| t == "Building Information"));
}

// ─── Images ─────────────────────────────────────────────────────

#[test]
fn test_one_page_per_non_empty_reference() {
    let photos = MemoryPhotos::empty()
        .with("content://site/a.jpg", jpeg_fixture(400, 300))
        .with("https://cdn.example.com/b.png", png_fixture(20, 40));
    let report = AssessmentReport {
        image_urls: vec![
            "content://site/a.jpg".into(),
            "".into(),
            "https://cdn.example.com/b.png".into(),
            "content://site/missing.jpg".into(),
        ],
        ..Default::default()
    };
    let doc = layout(&report, &photos);
    let text_pages = layout(&AssessmentReport::default(), &photos).page_count();
    assert_eq!(doc.page_count() - text_pages, 3);

    assert_eq!(page_texts(&doc, 1), vec!["Image 1 of 3"]);
    assert_eq!(page_texts(&doc, 2), vec!["Image 2 of 3"]);
    let failed = page_texts(&doc, 3);
    assert_eq!(failed[0], "Image 3 of 3");
    assert!(failed[1].starts_with("Image could not be loaded: "));
    assert!(failed.join(" ").contains("missing.jpg"));
}

#[test]
fn test_image_is_fitted_and_centred() {
    let photos = MemoryPhotos::empty().with("content://site/tall.png", png_fixture(10, 20));
    let report = AssessmentReport {
        image_urls: vec!["content://site/tall.png".into()],
        ..Default::default()
    };
    let doc = layout(&report, &photos);
    let image = doc.pages()[1]
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::Image { x, y, width, height, .. } => Some((*x, *y, *width, *height)),
            _ => None,
        })
        .expect("image drawn");
    assert_eq!(image, (124.0, 100.0, 346.0, 692.0));
}

#[test]
fn test_unsupported_scheme_still_gets_a_page() {
    let report = AssessmentReport {
        image_urls: vec!["file:///sdcard/DCIM/1.jpg".into()],
        ..Default::default()
    };
    let doc = layout(&report, &MemoryPhotos::empty());
    assert_eq!(doc.page_count(), 2);
    let texts = page_texts(&doc, 1).join(" ");
    assert!(texts.contains("unsupported image reference scheme"));
}

#[test]
fn test_fit_reference_case() {
    let bound = BoundingBox {
        left: 40,
        top: 100,
        width: 515,
        height: 692,
    };
    let fitted = fit(4000, 3000, &bound).unwrap();
    assert!(fitted.width <= 515 && fitted.height <= 692);
    let source_ratio = 4000.0 / 3000.0;
    let fitted_ratio = fitted.width as f64 / fitted.height as f64;
    assert!((source_ratio - fitted_ratio).abs() < 0.01);
    assert_eq!(fitted.left, (595 - fitted.width) / 2);
    assert!(fit(0, 3000, &bound).is_err());
}

// ─── Content ────────────────────────────────────────────────────

#[test]
fn test_all_zero_counts_use_fixed_strings() {
    let doc = layout(&AssessmentReport::default(), &MemoryPhotos::empty());
    let texts = all_texts(&doc);
    assert!(texts.iter().any(|t| t == narrative::SUMMARY_NO_ISSUES));
    assert!(texts.iter().any(|t| t == narrative::NO_DAMAGE_DETECTED));
    assert!(texts.iter().any(|t| t == recommendations::NO_ISSUES_FOUND));
}

#[test]
fn test_recommendation_entries_from_counts() {
    let report = AssessmentReport {
        crack_high: 2,
        crack_moderate: 0,
        crack_low: 1,
        paint: 0,
        algae: 1,
        ..Default::default()
    };
    let labels: Vec<&str> = report.recommendation_entries().iter().map(|e| e.label()).collect();
    assert_eq!(
        labels,
        vec!["Serious Concrete Damage", "Small Hairline Crack/s", "Algae/Moss Growth"]
    );
    for label in labels {
        assert!(!catalog::guidance_for(label).is_empty());
    }

    let doc = layout(&report, &MemoryPhotos::empty());
    let texts = all_texts(&doc);
    assert!(texts.iter().any(|t| t == "Serious Concrete Damage (HIGH)"));
    assert!(texts.iter().any(|t| t == "Found in 2 locations"));
    assert!(!texts.iter().any(|t| t.starts_with("Large Crack Found")));
}

#[test]
fn test_unknown_label_gets_generic_guidance() {
    let generic = catalog::guidance_for("Rust Stains");
    assert!(!generic.is_empty());
    assert_eq!(generic, catalog::GENERIC_MAINTENANCE);
    assert_eq!(catalog::guidance_for("algae/moss growth"), catalog::GENERIC_MAINTENANCE);
    assert_ne!(
        catalog::guidance_for(DefectCategory::AlgaeGrowth.label()),
        catalog::GENERIC_MAINTENANCE
    );
}

#[test]
fn test_badge_colors() {
    use inspecta::blocks::header::badge_color;
    use inspecta::style::Color;
    assert_eq!(badge_color(RiskLevel::from("High Risk")), Color::RISK_HIGH);
    assert_eq!(badge_color(RiskLevel::from("Moderate Risk")), Color::RISK_MODERATE);
    assert_eq!(badge_color(RiskLevel::from("Unknown")), Color::RISK_LOW);
}

#[test]
fn test_wrapping_fits_and_is_lossless() {
    let fc = FontContext::new();
    let style = inspecta::style::TextStyle::BODY;
    let input = "The  north   facade shows   extensive spalling near the \
                 third-floor balconies, with Supercalifragilisticexpialidocious-length words too.";
    let measure = |s: &str| {
        use inspecta::font::GlyphMetrics;
        fc.text_width(s, style.weight, style.size)
    };
    let lines = text::wrap(input, measure, 120.0);
    for line in &lines {
        assert!(measure(line) <= 120.0 || !line.contains(' '), "{line:?} overflows");
    }
    let normalized: Vec<&str> = input.split(' ').filter(|w| !w.is_empty()).collect();
    assert_eq!(lines.join(" "), normalized.join(" "));
}

// ─── End to end ─────────────────────────────────────────────────

#[test]
fn test_render_json_produces_valid_pdf() {
    let json = r#"{
        "name": "Block C",
        "date": "March 3, 2025",
        "overallRisk": "Moderate Risk",
        "totalIssues": 3,
        "crackModerate": 2,
        "paint": 1,
        "buildingType": "Residential",
        "imageUrls": ["content://site/a.jpg"]
    }"#;
    let photos = MemoryPhotos::empty().with("content://site/a.jpg", jpeg_fixture(64, 48));
    let bytes = inspecta::render_json(json, &photos).unwrap();
    assert_valid_pdf(&bytes);
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Count 2"));
    assert!(text.contains("/DCTDecode"));
    assert!(text.contains("/Title (Block C)"));
}

#[test]
fn test_invalid_json_is_parse_error() {
    let err = inspecta::render_json("{ \"crackHigh\": -1 }", &MemoryPhotos::empty()).unwrap_err();
    assert!(matches!(err, ReportError::ParseError { .. }));
    assert!(err.to_string().contains("Hint"));
}

#[test]
fn test_output_is_deterministic() {
    let photos = MemoryPhotos::empty().with("content://site/a.png", png_fixture(8, 8));
    let mut report = full_report();
    report.image_urls = vec!["content://site/a.png".into(), "ftp://x".into()];
    let first = inspecta::render(&report, &photos).unwrap();
    let second = inspecta::render(&report, &photos).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cancelled_render_returns_no_bytes() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let result = inspecta::render_with(
        &full_report(),
        &MemoryPhotos::empty(),
        &inspecta::ReportConfig::default(),
        &cancel,
    );
    assert!(matches!(result, Err(ReportError::Cancelled)));
}
