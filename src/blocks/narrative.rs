//! Narrative summary and detection-count summary.

use super::{draw_heading, draw_lines, lines_height, BlockContext, HEADING_HEIGHT, LINE_HEIGHT, SECTION_GAP};
use crate::layout::{Cursor, Surface};
use crate::model::{AssessmentReport, DefectCategory};
use crate::style::TextStyle;

pub const SUMMARY_NO_ISSUES: &str = "No significant issues were detected during this assessment.";
pub const NO_DAMAGE_DETECTED: &str = "No damage detected.";

const DETECTION_LINE_HEIGHT: u32 = 18;

/// The one-sentence narrative for the summary block.
pub fn summary_sentence(report: &AssessmentReport) -> String {
    if report.total_issues == 0 {
        return SUMMARY_NO_ISSUES.to_string();
    }

    let mut sentence = if report.total_issues == 1 {
        "A total of 1 issue was identified".to_string()
    } else {
        format!("A total of {} issues were identified", report.total_issues)
    };

    let clauses: Vec<String> = report
        .observed_categories()
        .into_iter()
        .map(|(category, count)| format!("{} {}", count, category.summary_phrase()))
        .collect();
    if !clauses.is_empty() {
        sentence.push_str(": ");
        sentence.push_str(&clauses.join(", "));
    }
    sentence.push('.');
    sentence
}

fn summary_lines(ctx: &BlockContext, report: &AssessmentReport) -> Vec<String> {
    ctx.wrap(&summary_sentence(report), &TextStyle::BODY, ctx.content_width())
}

/// Exact height the summary block will take.
pub fn summary_height(ctx: &BlockContext, report: &AssessmentReport) -> u32 {
    HEADING_HEIGHT + lines_height(summary_lines(ctx, report).len(), LINE_HEIGHT) + SECTION_GAP
}

pub fn render_summary(
    ctx: &BlockContext,
    surface: &mut Surface,
    cursor: Cursor,
    report: &AssessmentReport,
) -> Cursor {
    let cursor = draw_heading(ctx, surface, cursor, "Summary");
    let lines = summary_lines(ctx, report);
    let cursor = draw_lines(surface, ctx.left(), cursor, &lines, TextStyle::BODY, LINE_HEIGHT);
    cursor.advance(SECTION_GAP)
}

/// One line per non-zero group; cracks are combined into a single line.
pub fn detection_lines(report: &AssessmentReport) -> Vec<String> {
    let mut lines = Vec::new();
    let cracks = [report.crack_high, report.crack_moderate, report.crack_low];
    if cracks.iter().any(|&n| n > 0) {
        lines.push(format!(
            "Cracks (High/Mod/Low): {}/{}/{}",
            report.crack_high, report.crack_moderate, report.crack_low
        ));
    }
    let paint = DefectCategory::PaintDamage.count_in(report);
    if paint > 0 {
        lines.push(format!("Paint Damage: {}", paint));
    }
    let algae = DefectCategory::AlgaeGrowth.count_in(report);
    if algae > 0 {
        lines.push(format!("Algae/Moss Growth: {}", algae));
    }
    if lines.is_empty() {
        lines.push(NO_DAMAGE_DETECTED.to_string());
    }
    lines
}

pub fn detection_height(report: &AssessmentReport) -> u32 {
    HEADING_HEIGHT + lines_height(detection_lines(report).len(), DETECTION_LINE_HEIGHT) + SECTION_GAP
}

pub fn render_detection_summary(
    ctx: &BlockContext,
    surface: &mut Surface,
    cursor: Cursor,
    report: &AssessmentReport,
) -> Cursor {
    let cursor = draw_heading(ctx, surface, cursor, "Detection Summary");
    let lines = detection_lines(report);
    let cursor = draw_lines(
        surface,
        ctx.left(),
        cursor,
        &lines,
        TextStyle::BODY,
        DETECTION_LINE_HEIGHT,
    );
    cursor.advance(SECTION_GAP)
}
