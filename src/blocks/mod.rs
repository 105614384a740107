//! # Content Blocks
//!
//! One stateless renderer per section of the report template. Each takes the
//! shared [`BlockContext`], the current page's surface, the cursor, and the
//! data it draws, and returns the cursor below what it drew. Renderers never
//! break pages themselves; the template break-checks before calling them.

pub mod building;
pub mod header;
pub mod image_page;
pub mod narrative;
pub mod recommendations;

use crate::font::GlyphMetrics;
use crate::layout::{Cursor, PageGeometry, Surface};
use crate::style::TextStyle;
use crate::text;

/// Space between sections.
pub const SECTION_GAP: u32 = 20;
/// Height taken by a section heading, including the gap below it.
pub const HEADING_HEIGHT: u32 = 28;
/// Baseline-to-baseline distance for body text.
pub const LINE_HEIGHT: u32 = 16;

/// What every renderer needs besides the surface: where the content area is
/// and how wide text is.
#[derive(Clone, Copy)]
pub struct BlockContext<'a> {
    pub metrics: &'a dyn GlyphMetrics,
    pub geometry: PageGeometry,
}

impl<'a> BlockContext<'a> {
    pub fn new(metrics: &'a dyn GlyphMetrics, geometry: PageGeometry) -> Self {
        Self { metrics, geometry }
    }

    pub fn left(&self) -> f64 {
        self.geometry.content_left()
    }

    pub fn content_width(&self) -> f64 {
        self.geometry.content_width()
    }

    pub fn text_width(&self, text: &str, style: &TextStyle) -> f64 {
        self.metrics.text_width(text, style.weight, style.size)
    }

    pub fn wrap(&self, text: &str, style: &TextStyle, max_width: f64) -> Vec<String> {
        text::wrap_styled(self.metrics, text, style, max_width)
    }
}

/// Draw a section heading and return the cursor below it.
pub fn draw_heading(ctx: &BlockContext, surface: &mut Surface, cursor: Cursor, title: &str) -> Cursor {
    let style = TextStyle::SECTION;
    surface.draw_text(ctx.left(), cursor.top() + style.size, title, style);
    cursor.advance(HEADING_HEIGHT)
}

/// Draw pre-wrapped lines starting at `x`, one per `line_height`.
pub fn draw_lines(
    surface: &mut Surface,
    x: f64,
    cursor: Cursor,
    lines: &[String],
    style: TextStyle,
    line_height: u32,
) -> Cursor {
    let mut cursor = cursor;
    for line in lines {
        surface.draw_text(x, cursor.top() + style.size, line.as_str(), style);
        cursor = cursor.advance(line_height);
    }
    cursor
}

/// Height of `n` lines at `line_height`.
pub fn lines_height(n: usize, line_height: u32) -> u32 {
    n as u32 * line_height
}
