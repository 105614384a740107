//! # Font Management
//!
//! The report uses two of the 14 standard PDF fonts, Helvetica and
//! Helvetica-Bold, which don't require embedding. Text measurement goes
//! through the [`GlyphMetrics`] trait so layout never depends on a concrete
//! metrics source.

pub mod metrics;
pub mod winansi;

pub use metrics::StandardFontMetrics;

/// The two weights the template draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// The standard PDF fonts the report can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// The PDF name for this font.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// The font resource name used inside content streams.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
        }
    }

    pub fn for_weight(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Regular => Self::Helvetica,
            FontWeight::Bold => Self::HelveticaBold,
        }
    }

    pub fn metrics(&self) -> &'static StandardFontMetrics {
        match self {
            Self::Helvetica => &metrics::HELVETICA,
            Self::HelveticaBold => &metrics::HELVETICA_BOLD,
        }
    }
}

/// Glyph-metrics provider: reports the rendered width of a string.
///
/// Wrapping and centred text both go through this trait. Implementations
/// must be deterministic; page breaks depend on these numbers.
pub trait GlyphMetrics {
    /// Width of `text` in layout units (points) at the given weight and size.
    fn text_width(&self, text: &str, weight: FontWeight, size: f64) -> f64;
}

/// Default metrics provider backed by the standard font AFM tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontContext;

impl FontContext {
    pub fn new() -> Self {
        Self
    }

    /// Get the advance width of a single character in points.
    pub fn char_width(&self, ch: char, weight: FontWeight, font_size: f64) -> f64 {
        StandardFont::for_weight(weight)
            .metrics()
            .char_width(ch, font_size)
    }
}

impl GlyphMetrics for FontContext {
    fn text_width(&self, text: &str, weight: FontWeight, size: f64) -> f64 {
        StandardFont::for_weight(weight)
            .metrics()
            .measure_string(text, size)
    }
}
