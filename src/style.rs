//! # Style
//!
//! Colors and text styles used by the report template. The template is fixed,
//! so there is no cascade here: every block picks one of the named styles.

use crate::font::FontWeight;
use serde::{Deserialize, Serialize};

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64, // 0.0 - 1.0
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Badge fill for "High Risk".
    pub const RISK_HIGH: Color = Color::from_rgb8(211, 47, 47);
    /// Badge fill for "Moderate Risk".
    pub const RISK_MODERATE: Color = Color::from_rgb8(245, 124, 0);
    /// Badge fill for everything else.
    pub const RISK_LOW: Color = Color::from_rgb8(56, 142, 60);

    pub const TEXT_MUTED: Color = Color::from_rgb8(97, 97, 97);
    pub const HEADING: Color = Color::from_rgb8(33, 33, 33);

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

/// Font size, weight and color of a single text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub weight: FontWeight,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(size: f64, weight: FontWeight, color: Color) -> Self {
        Self {
            size,
            weight,
            color,
        }
    }

    pub const TITLE: TextStyle = TextStyle::new(22.0, FontWeight::Bold, Color::HEADING);
    pub const SECTION: TextStyle = TextStyle::new(16.0, FontWeight::Bold, Color::HEADING);
    pub const BODY: TextStyle = TextStyle::new(12.0, FontWeight::Regular, Color::BLACK);
    pub const BODY_BOLD: TextStyle = TextStyle::new(12.0, FontWeight::Bold, Color::BLACK);
    pub const LABEL: TextStyle = TextStyle::new(11.0, FontWeight::Bold, Color::TEXT_MUTED);
    pub const SMALL: TextStyle = TextStyle::new(11.0, FontWeight::Regular, Color::BLACK);
    pub const BADGE: TextStyle = TextStyle::new(14.0, FontWeight::Bold, Color::WHITE);
    pub const CAPTION: TextStyle = TextStyle::new(14.0, FontWeight::Bold, Color::HEADING);

    /// Same style, different color.
    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}
