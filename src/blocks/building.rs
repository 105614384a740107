//! Building-information table and the trailing notes paragraph.

use super::{draw_heading, BlockContext, LINE_HEIGHT, SECTION_GAP};
use crate::layout::{Cursor, Surface};
use crate::model::AssessmentReport;
use crate::style::TextStyle;

/// Offset of the value column from the content edge.
pub const VALUE_COLUMN: f64 = 150.0;
const ROW_GAP: u32 = 4;

/// One label/value row with its value already wrapped to the value column.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingRow {
    pub label: &'static str,
    pub lines: Vec<String>,
}

impl BuildingRow {
    /// Break-check height for line `index`: the last line carries the row gap.
    pub fn line_height(&self, index: usize) -> u32 {
        if index + 1 == self.lines.len() {
            LINE_HEIGHT + ROW_GAP
        } else {
            LINE_HEIGHT
        }
    }
}

/// Rows for every present field, in display order.
pub fn building_rows(ctx: &BlockContext, report: &AssessmentReport) -> Vec<BuildingRow> {
    let value_width = ctx.content_width() - VALUE_COLUMN;
    report
        .building
        .rows()
        .into_iter()
        .map(|(label, value)| BuildingRow {
            label,
            lines: ctx.wrap(value.trim(), &TextStyle::SMALL, value_width),
        })
        .collect()
}

pub fn render_building_heading(ctx: &BlockContext, surface: &mut Surface, cursor: Cursor) -> Cursor {
    draw_heading(ctx, surface, cursor, "Building Information")
}

/// One wrapped line of a row. The label is drawn beside the first line
/// only; long values flow line by line so they can continue on the next
/// page like the notes do.
pub fn render_row_line(
    ctx: &BlockContext,
    surface: &mut Surface,
    cursor: Cursor,
    row: &BuildingRow,
    index: usize,
) -> Cursor {
    if index == 0 {
        let style = TextStyle::LABEL;
        surface.draw_text(ctx.left(), cursor.top() + style.size, row.label, style);
    }
    if let Some(line) = row.lines.get(index) {
        let style = TextStyle::SMALL;
        surface.draw_text(ctx.left() + VALUE_COLUMN, cursor.top() + style.size, line.as_str(), style);
    }
    cursor.advance(row.line_height(index))
}

/// Space between the last row and whatever follows the table.
pub fn table_end(cursor: Cursor) -> Cursor {
    cursor.advance(ROW_GAP)
}

/// Notes wrapped to the content width, or nothing when absent.
pub fn notes_lines(ctx: &BlockContext, report: &AssessmentReport) -> Vec<String> {
    report
        .building
        .notes()
        .map(|notes| ctx.wrap(notes, &TextStyle::SMALL, ctx.content_width()))
        .unwrap_or_default()
}

pub fn render_notes_heading(ctx: &BlockContext, surface: &mut Surface, cursor: Cursor) -> Cursor {
    let style = TextStyle::LABEL;
    surface.draw_text(ctx.left(), cursor.top() + style.size, "Notes", style);
    cursor.advance(LINE_HEIGHT + ROW_GAP)
}

/// One line of the notes paragraph. Notes flow line by line so a long
/// paragraph can continue on the next page.
pub fn render_notes_line(ctx: &BlockContext, surface: &mut Surface, cursor: Cursor, line: &str) -> Cursor {
    let style = TextStyle::SMALL;
    surface.draw_text(ctx.left(), cursor.top() + style.size, line, style);
    cursor.advance(LINE_HEIGHT)
}

/// Space after the whole building section.
pub fn section_end(cursor: Cursor) -> Cursor {
    cursor.advance(SECTION_GAP)
}
