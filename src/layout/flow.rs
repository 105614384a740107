//! # Page Flow
//!
//! Owns the page being built and the cursor on it. Blocks are placed with a
//! break-check against a fixed height estimate, then drawn in place by a
//! renderer that returns the new cursor. Closing the flow finalizes the last
//! page and consumes the controller, so nothing can draw after that.

use super::page_break::{decide_break, BreakDecision};
use super::{Cursor, Document, Page, PageGeometry, Placement, Surface};

pub struct PageFlow {
    geometry: PageGeometry,
    pages: Vec<Page>,
    surface: Surface,
    cursor: Cursor,
    placements: Vec<Placement>,
}

impl PageFlow {
    /// Open page 1 with the cursor at the top margin.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            surface: Surface::new(&geometry),
            cursor: Cursor::at(geometry.margin_top),
            geometry,
            pages: Vec::new(),
            placements: Vec::new(),
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Zero-based index of the page currently being built.
    pub fn page_index(&self) -> usize {
        self.pages.len()
    }

    /// Make room for a block of `estimate` height, breaking the page first
    /// if it would cross the bottom margin. The check is recorded.
    ///
    /// A block that does not fit even on an empty page stays where it is:
    /// breaking would only finalize a blank page.
    pub fn break_check(&mut self, block: &'static str, estimate: u32) -> BreakDecision {
        let decision = if self.at_page_top() {
            BreakDecision::Place
        } else {
            decide_break(self.cursor.y(), estimate, self.geometry.content_bottom())
        };
        if decision == BreakDecision::MoveToNextPage {
            log::debug!(
                "page break before {block}: cursor {} + {estimate} > {}",
                self.cursor.y(),
                self.geometry.content_bottom()
            );
            self.start_fresh_page();
        }
        self.placements.push(Placement {
            block,
            page_index: self.page_index(),
            cursor_before: self.cursor.y(),
            estimate,
        });
        decision
    }

    fn at_page_top(&self) -> bool {
        self.cursor == Cursor::at(self.geometry.margin_top)
    }

    /// Draw a block at the cursor and advance to where the renderer ended.
    pub fn render<F>(&mut self, draw: F)
    where
        F: FnOnce(&mut Surface, Cursor) -> Cursor,
    {
        let next = draw(&mut self.surface, self.cursor);
        debug_assert!(next >= self.cursor, "renderer moved the cursor up");
        self.cursor = next.max(self.cursor);
    }

    /// Break-check then render.
    pub fn place<F>(&mut self, block: &'static str, estimate: u32, draw: F)
    where
        F: FnOnce(&mut Surface, Cursor) -> Cursor,
    {
        self.break_check(block, estimate);
        self.render(draw);
    }

    /// Finalize the current page and open an empty one at the top margin.
    pub fn start_fresh_page(&mut self) {
        let finished = std::mem::replace(&mut self.surface, Surface::new(&self.geometry));
        self.pages.push(finished.finalize());
        self.cursor = Cursor::at(self.geometry.margin_top);
        log::debug!("finalized page {}", self.pages.len());
    }

    /// Finalize the last page and hand over the finished document.
    pub fn close(mut self) -> Document {
        let last = std::mem::replace(&mut self.surface, Surface::new(&self.geometry));
        self.pages.push(last.finalize());
        log::debug!("document closed with {} pages", self.pages.len());
        Document {
            geometry: self.geometry,
            pages: self.pages,
            placements: self.placements,
        }
    }
}
