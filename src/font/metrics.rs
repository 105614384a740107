//! Advance widths for the standard Helvetica faces, from the Adobe AFM files.
//!
//! Widths are in 1/1000 em and indexed by WinAnsi code, so every character
//! the PDF writer can encode is measured with the width it will be drawn at.
//! Characters outside the encoding fall back to the face's default width.

use super::winansi;

/// AFM widths for one standard font face.
#[derive(Debug)]
pub struct StandardFontMetrics {
    /// Widths for 0x20..=0x7E.
    ascii: [u16; 95],
    /// Widths for 0x80..=0xFF; zero marks an unassigned slot.
    upper: [u16; 128],
    default_width: u16,
}

pub static HELVETICA: StandardFontMetrics = StandardFontMetrics {
    ascii: [
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
        278, 278, 584, 584, 584, 556, 1015, // :..@
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A..M
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
        278, 278, 278, 469, 556, 333, // [..`
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a..m
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n..z
        334, 260, 334, 584, // {..~
    ],
    upper: [
        // 0x80..=0x9F
        556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
        0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
        // 0xA0..=0xFF
        278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
    ],
    default_width: 556,
};

pub static HELVETICA_BOLD: StandardFontMetrics = StandardFontMetrics {
    ascii: [
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
        333, 333, 584, 584, 584, 611, 975, // :..@
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A..M
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
        333, 278, 333, 584, 556, 333, // [..`
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a..m
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n..z
        389, 280, 389, 584, // {..~
    ],
    upper: [
        // 0x80..=0x9F
        556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
        0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
        // 0xA0..=0xFF
        278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
        611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
    ],
    default_width: 611,
};

impl StandardFontMetrics {
    /// Advance width of `ch` in 1/1000 em.
    fn units(&self, ch: char) -> u16 {
        let width = match winansi::encode(ch) {
            Some(code @ 0x20..=0x7E) => self.ascii[usize::from(code - 0x20)],
            Some(code @ 0x80..=0xFF) => self.upper[usize::from(code - 0x80)],
            _ => 0,
        };
        if width == 0 {
            self.default_width
        } else {
            width
        }
    }

    /// Get the advance width of a character in points.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        self.units(ch) as f64 * font_size / 1000.0
    }

    /// Measure a string in points.
    pub fn measure_string(&self, text: &str, font_size: f64) -> f64 {
        let units: f64 = text.chars().map(|ch| f64::from(self.units(ch))).sum();
        units * font_size / 1000.0
    }
}
