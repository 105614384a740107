//! # Report Template
//!
//! Drives the fixed block sequence through a [`PageFlow`]: header, risk
//! badge, summary, building information, detection summary,
//! recommendations, then one page per photograph.
//!
//! Each text block is break-checked against a fixed estimate before it is
//! drawn. Where the measured height of a block can exceed its estimate the
//! larger value is used. Content of unbounded length (building rows, notes,
//! recommendation entries) is checked line by line or entry by entry, so
//! nothing runs past the bottom margin.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::blocks::{building, header, image_page, narrative, recommendations, BlockContext, LINE_HEIGHT};
use crate::error::ReportError;
use crate::font::GlyphMetrics;
use crate::image_loader::ImageResolver;
use crate::layout::flow::PageFlow;
use crate::layout::{Document, PageGeometry};
use crate::model::AssessmentReport;

pub const SUMMARY_ESTIMATE: u32 = 80;
pub const BUILDING_INFO_ESTIMATE: u32 = 150;
pub const NOTES_ESTIMATE: u32 = 60;
pub const DETECTION_ESTIMATE: u32 = 100;
pub const RECOMMENDATIONS_ESTIMATE: u32 = 200;

/// Cooperative cancellation flag, shareable across threads.
#[derive(Debug, Default)]
pub struct CancelToken(AtomicBool);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn check(&self) -> Result<(), ReportError> {
        if self.is_cancelled() {
            log::debug!("generation cancelled");
            Err(ReportError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Lay out a full report. Returns the closed document or, if cancelled,
/// nothing at all.
pub fn layout_report(
    report: &AssessmentReport,
    metrics: &dyn GlyphMetrics,
    resolver: &dyn ImageResolver,
    geometry: PageGeometry,
    cancel: &CancelToken,
) -> Result<Document, ReportError> {
    let ctx = BlockContext::new(metrics, geometry);
    let mut flow = PageFlow::new(geometry);

    cancel.check()?;
    flow.place("header", header::HEADER_HEIGHT, |s, c| {
        header::render_header(&ctx, s, c, report)
    });
    flow.place("risk badge", header::BADGE_HEIGHT as u32, |s, c| {
        header::render_risk_badge(&ctx, s, c, report)
    });

    cancel.check()?;
    let estimate = SUMMARY_ESTIMATE.max(narrative::summary_height(&ctx, report));
    flow.place("summary", estimate, |s, c| narrative::render_summary(&ctx, s, c, report));

    if report.building.has_any() {
        cancel.check()?;
        flow.place("building info", BUILDING_INFO_ESTIMATE, |s, c| {
            building::render_building_heading(&ctx, s, c)
        });
        for row in building::building_rows(&ctx, report) {
            for index in 0..row.lines.len() {
                flow.place("building row", row.line_height(index), |s, c| {
                    building::render_row_line(&ctx, s, c, &row, index)
                });
            }
        }
        flow.render(|_, c| building::table_end(c));

        let notes = building::notes_lines(&ctx, report);
        if !notes.is_empty() {
            flow.place("notes", NOTES_ESTIMATE, |s, c| {
                building::render_notes_heading(&ctx, s, c)
            });
            for line in &notes {
                flow.place("notes line", LINE_HEIGHT, |s, c| {
                    building::render_notes_line(&ctx, s, c, line)
                });
            }
        }
        flow.render(|_, c| building::section_end(c));
    }

    cancel.check()?;
    let estimate = DETECTION_ESTIMATE.max(narrative::detection_height(report));
    flow.place("detection summary", estimate, |s, c| {
        narrative::render_detection_summary(&ctx, s, c, report)
    });

    cancel.check()?;
    let entries = report.recommendation_entries();
    let estimate = RECOMMENDATIONS_ESTIMATE.max(recommendations::heading_height(&ctx, &entries));
    flow.place("recommendations", estimate, |s, c| {
        recommendations::render_heading(&ctx, s, c, &entries)
    });
    for entry in &entries {
        cancel.check()?;
        let height = recommendations::entry_height(&ctx, entry);
        flow.place("recommendation", height, |s, c| {
            recommendations::render_entry(&ctx, s, c, entry)
        });
    }

    let references = report.image_references();
    let total = references.len();
    for (index, reference) in references.iter().enumerate() {
        cancel.check()?;
        flow.start_fresh_page();
        flow.render(|s, c| {
            image_page::render_image_page(&ctx, s, c, resolver, reference, index + 1, total)
        });
    }

    let document = flow.close();
    log::info!(
        "laid out report '{}' on {} pages ({} images)",
        report.name,
        document.page_count(),
        total
    );
    Ok(document)
}
