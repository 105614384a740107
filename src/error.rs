//! Structured error types for report generation.
//!
//! Generation is all-or-nothing at the document level: a `ReportError` means
//! no bytes were produced. Image failures are not in here; they are recovered
//! per page, see [`crate::image_loader::ImageError`].

use thiserror::Error;

/// The unified error type returned by the public rendering functions.
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON input failed to parse as a valid assessment report.
    #[error("Failed to parse report: {source}{}", format_hint(.hint))]
    ParseError {
        #[source]
        source: serde_json::Error,
        hint: String,
    },
    /// The output surface or PDF serialization failed.
    #[error("Render error: {0}")]
    RenderError(String),
    /// Generation was cancelled before the document was closed.
    #[error("Report generation was cancelled")]
    Cancelled,
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the report schema. Counts must be non-negative integers and metadata fields strings.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        ReportError::ParseError { source: e, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_carries_hint() {
        let err: ReportError = serde_json::from_str::<serde_json::Value>("{ \"a\": 1, }")
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to parse report"));
        assert!(msg.contains("trailing commas"));
    }

    #[test]
    fn cancelled_message() {
        assert_eq!(
            ReportError::Cancelled.to_string(),
            "Report generation was cancelled"
        );
    }
}
