//! # Inspecta
//!
//! Renders a building-inspection assessment into a paginated PDF report.
//!
//! The page is the unit of layout. Every block of the fixed template is
//! break-checked against the bottom margin before it is drawn and flows
//! *into* the current page or the next one; there is no infinite canvas and
//! no backtracking. Photographs get one page each, fitted to the content
//! box with their aspect ratio preserved.
//!
//! ## Architecture
//!
//! ```text
//! Input (AssessmentReport / JSON)
//!       ↓
//!   [template]  — Fixed block sequence, break-checks, cancellation
//!       ↓
//!   [blocks]    — One renderer per section, drawing on the current page
//!       ↓
//!   [layout]    — PageFlow, cursor, surfaces, image fitting
//!       ↓
//!   [pdf]       — Serialize to PDF bytes
//! ```
//!
//! Text is measured through [`font::GlyphMetrics`] and photographs are
//! fetched through [`image_loader::ImageResolver`]; both are injected, so
//! the layout core does no I/O of its own.

pub mod blocks;
pub mod catalog;
pub mod config;
pub mod error;
pub mod font;
pub mod image_loader;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod style;
pub mod template;
pub mod text;

pub use config::{DocumentInfo, ReportConfig};
pub use error::ReportError;
pub use image_loader::{ByteSource, ContentStore, ImageError, ImageResolver};
pub use model::AssessmentReport;
pub use template::CancelToken;

use font::FontContext;
use pdf::PdfWriter;

/// Render a report to PDF bytes with the default A4 configuration.
pub fn render(report: &AssessmentReport, resolver: &dyn ImageResolver) -> Result<Vec<u8>, ReportError> {
    render_with(report, resolver, &ReportConfig::default(), &CancelToken::new())
}

/// Render with an explicit configuration and a cancellation token.
///
/// All-or-nothing: on error no bytes are returned. Image failures are not
/// errors here; each one becomes an error caption on its own page.
pub fn render_with(
    report: &AssessmentReport,
    resolver: &dyn ImageResolver,
    config: &ReportConfig,
    cancel: &CancelToken,
) -> Result<Vec<u8>, ReportError> {
    let font_context = FontContext::new();
    let document = template::layout_report(report, &font_context, resolver, config.page, cancel)?;
    let writer = PdfWriter::new();
    writer.write(&document, &config.document_info(report))
}

/// Render a report described as JSON to PDF bytes.
pub fn render_json(json: &str, resolver: &dyn ImageResolver) -> Result<Vec<u8>, ReportError> {
    let report: AssessmentReport = serde_json::from_str(json)?;
    render(&report, resolver)
}
