//! # Page-Aware Layout
//!
//! The page is the unit of layout. Blocks are drawn straight onto the current
//! page's [`Surface`] at a vertical [`Cursor`]; before a block that needs
//! contiguous space, the [`flow::PageFlow`] controller asks whether it fits
//! and, if not, closes the page and opens a fresh one. There is no infinite
//! canvas and no backtracking: one forward pass, so the same report always
//! breaks at the same places.
//!
//! Coordinates here are top-left based with y growing downward. Text `y`
//! values are baselines. The PDF writer flips to PDF user space.

pub mod fit;
pub mod flow;
pub mod page_break;

use serde::{Deserialize, Serialize};

use crate::image_loader::LoadedImage;
use crate::style::{Color, TextStyle};

/// Page size and margins in layout units (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
}

impl Default for PageGeometry {
    /// ISO A4 at 72 units per inch.
    fn default() -> Self {
        Self {
            width: 595,
            height: 842,
            margin_left: 40,
            margin_right: 40,
            margin_top: 50,
            margin_bottom: 50,
        }
    }
}

impl PageGeometry {
    pub fn content_left(&self) -> f64 {
        self.margin_left as f64
    }

    pub fn content_width(&self) -> f64 {
        self.width.saturating_sub(self.margin_left + self.margin_right) as f64
    }

    /// The lowest y a block may reach: `height - margin_bottom`.
    pub fn content_bottom(&self) -> u32 {
        self.height.saturating_sub(self.margin_bottom)
    }
}

/// The running vertical write position on the current page.
///
/// Never moves up within a page; a new page resets it to the top margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(u32);

impl Cursor {
    pub fn at(y: u32) -> Self {
        Self(y)
    }

    pub fn y(&self) -> u32 {
        self.0
    }

    /// The cursor as a drawing coordinate.
    pub fn top(&self) -> f64 {
        self.0 as f64
    }

    #[must_use]
    pub fn advance(self, by: u32) -> Self {
        Self(self.0.saturating_add(by))
    }
}

/// A single drawing operation on a page.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// A single line of text; `y` is the baseline.
    Text {
        x: f64,
        y: f64,
        text: String,
        style: TextStyle,
    },
    /// A filled rectangle with uniformly rounded corners.
    RoundedRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
        fill: Color,
    },
    /// A bitmap scaled into the given box.
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        image: LoadedImage,
    },
}

/// The render target for the page currently being built.
#[derive(Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl Surface {
    pub fn new(geometry: &PageGeometry) -> Self {
        Self {
            width: geometry.width,
            height: geometry.height,
            commands: Vec::new(),
        }
    }

    pub fn draw_text(&mut self, x: f64, baseline: f64, text: impl Into<String>, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            x,
            y: baseline,
            text: text.into(),
            style,
        });
    }

    pub fn fill_rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
        fill: Color,
    ) {
        self.commands.push(DrawCommand::RoundedRect {
            x,
            y,
            width,
            height,
            radius,
            fill,
        });
    }

    pub fn draw_image(&mut self, x: f64, y: f64, width: f64, height: f64, image: LoadedImage) {
        self.commands.push(DrawCommand::Image {
            x,
            y,
            width,
            height,
            image,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Freeze the surface into a finished page.
    fn finalize(self) -> Page {
        Page {
            width: self.width,
            height: self.height,
            commands: self.commands,
        }
    }
}

/// A finalized page. Read-only: nothing can draw on it any more.
#[derive(Debug, Clone)]
pub struct Page {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl Page {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text runs on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// One break-checked block: where it started and what it asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub block: &'static str,
    pub page_index: usize,
    pub cursor_before: u32,
    pub estimate: u32,
}

/// The complete, ordered output of one generation call.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) geometry: PageGeometry,
    pub(crate) pages: Vec<Page>,
    pub(crate) placements: Vec<Placement>,
}

impl Document {
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Break-check records, in the order the blocks were placed.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}
