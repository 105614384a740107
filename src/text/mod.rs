//! # Text Layout
//!
//! Greedy line breaking against a pixel-width budget.
//!
//! Words are separated by single spaces and never split: a word wider than
//! the budget is emitted on a line of its own and overflows. Widths come from
//! a caller-supplied measuring function so the same wrapper serves every font
//! size and weight in the template.

use crate::font::GlyphMetrics;
use crate::style::TextStyle;

/// Break `text` into lines no wider than `max_width`.
///
/// Runs of spaces collapse: the output joined with `" "` equals the input's
/// words joined with `" "`. Empty or all-space input yields no lines.
pub fn wrap<F>(text: &str, width_of: F, max_width: f64) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate_width = width_of(&format!("{} {}", current, word));
        if candidate_width > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap for a hanging-indent block: every line gets `max_width - indent`.
///
/// The caller draws the first line after its marker (a bullet) and the
/// continuation lines at the same indent, so all lines share one width.
pub fn wrap_hanging<F>(text: &str, width_of: F, max_width: f64, indent: f64) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    wrap(text, width_of, (max_width - indent).max(0.0))
}

/// Convenience: wrap using a metrics provider and a text style.
pub fn wrap_styled(
    metrics: &dyn GlyphMetrics,
    text: &str,
    style: &TextStyle,
    max_width: f64,
) -> Vec<String> {
    wrap(
        text,
        |s| metrics.text_width(s, style.weight, style.size),
        max_width,
    )
}
