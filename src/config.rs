//! Rendering configuration: page geometry and PDF document metadata.

use serde::{Deserialize, Serialize};

use crate::blocks::header::DEFAULT_TITLE;
use crate::layout::PageGeometry;
use crate::model::AssessmentReport;

/// Everything about the output that is not part of the report itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    pub page: PageGeometry,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
}

/// The PDF Info dictionary for one generated report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
}

impl ReportConfig {
    /// Info for `report`; the title follows the report name.
    pub fn document_info(&self, report: &AssessmentReport) -> DocumentInfo {
        let title = if report.name.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            report.name.clone()
        };
        DocumentInfo {
            title: Some(title),
            author: self.author.clone(),
            subject: self.subject.clone(),
            creator: self.creator.clone(),
        }
    }
}
