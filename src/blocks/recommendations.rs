//! Recommendations section: one entry per observed defect category with the
//! catalog guidance as a bulleted list.

use super::{draw_heading, BlockContext, HEADING_HEIGHT, LINE_HEIGHT, SECTION_GAP};
use crate::catalog;
use crate::layout::{Cursor, Surface};
use crate::model::{RecommendationEntry, Severity};
use crate::style::{Color, TextStyle};
use crate::text;

pub const NO_ISSUES_FOUND: &str = "No issues found. The building appears to be in good condition.";

const TITLE_HEIGHT: u32 = 20;
const BULLET_LINE_HEIGHT: u32 = 15;
const ENTRY_PADDING: u32 = 12;
const BULLET_OFFSET: f64 = 8.0;
const BULLET_INDENT: f64 = 20.0;
const BULLET: &str = "\u{2022}";

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::RISK_HIGH,
        Severity::Moderate => Color::RISK_MODERATE,
        Severity::Low => Color::RISK_LOW,
    }
}

/// Heading, plus the fixed message when nothing was found.
pub fn render_heading(
    ctx: &BlockContext,
    surface: &mut Surface,
    cursor: Cursor,
    entries: &[RecommendationEntry],
) -> Cursor {
    let cursor = draw_heading(ctx, surface, cursor, "Recommendations");
    if !entries.is_empty() {
        return cursor;
    }
    let lines = ctx.wrap(NO_ISSUES_FOUND, &TextStyle::BODY, ctx.content_width());
    let cursor = super::draw_lines(surface, ctx.left(), cursor, &lines, TextStyle::BODY, LINE_HEIGHT);
    cursor.advance(SECTION_GAP)
}

pub fn heading_height(ctx: &BlockContext, entries: &[RecommendationEntry]) -> u32 {
    if entries.is_empty() {
        let lines = ctx.wrap(NO_ISSUES_FOUND, &TextStyle::BODY, ctx.content_width());
        HEADING_HEIGHT + lines.len() as u32 * LINE_HEIGHT + SECTION_GAP
    } else {
        HEADING_HEIGHT
    }
}

fn title(entry: &RecommendationEntry) -> String {
    format!("{} ({})", entry.label(), entry.severity.tag())
}

fn bullet_lines(ctx: &BlockContext, entry: &RecommendationEntry) -> Vec<Vec<String>> {
    let style = TextStyle::SMALL;
    catalog::guidance_for(entry.label())
        .iter()
        .map(|item| {
            text::wrap_hanging(
                item,
                |s| ctx.text_width(s, &style),
                ctx.content_width(),
                BULLET_INDENT,
            )
        })
        .collect()
}

/// Exact height of one entry, used as its break-check estimate so an entry
/// is never split across pages.
pub fn entry_height(ctx: &BlockContext, entry: &RecommendationEntry) -> u32 {
    let count_line = if entry.count > 1 { LINE_HEIGHT } else { 0 };
    let bullets: u32 = bullet_lines(ctx, entry)
        .iter()
        .map(|lines| lines.len() as u32 * BULLET_LINE_HEIGHT)
        .sum();
    TITLE_HEIGHT + count_line + bullets + ENTRY_PADDING
}

pub fn render_entry(
    ctx: &BlockContext,
    surface: &mut Surface,
    cursor: Cursor,
    entry: &RecommendationEntry,
) -> Cursor {
    let left = ctx.left();
    let title_style = TextStyle::BODY_BOLD.with_color(severity_color(entry.severity));
    surface.draw_text(left, cursor.top() + title_style.size, title(entry), title_style);
    let mut cursor = cursor.advance(TITLE_HEIGHT);

    if entry.count > 1 {
        let style = TextStyle::SMALL.with_color(Color::TEXT_MUTED);
        surface.draw_text(
            left,
            cursor.top() + style.size,
            format!("Found in {} locations", entry.count),
            style,
        );
        cursor = cursor.advance(LINE_HEIGHT);
    }

    let style = TextStyle::SMALL;
    for lines in bullet_lines(ctx, entry) {
        surface.draw_text(left + BULLET_OFFSET, cursor.top() + style.size, BULLET, style);
        for line in lines {
            surface.draw_text(left + BULLET_INDENT, cursor.top() + style.size, line, style);
            cursor = cursor.advance(BULLET_LINE_HEIGHT);
        }
    }

    cursor.advance(ENTRY_PADDING)
}
