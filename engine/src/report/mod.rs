//! Report document model and output destinations.
//!
//! The valuation result is flattened into a titled document of two-column
//! sections; rendering and delivery live behind the `ReportSink` boundary.

mod document;
mod file_writer;
mod render;

pub use document::{build_report, REPORT_FILE_STEM, REPORT_TITLE};
pub use file_writer::FileWriter;
pub use render::render;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Report output destination trait
pub trait ReportSink: Send + Sync {
    /// Deliver a finished report document.
    fn send(&self, report: &Report) -> Result<(), EngineError>;
}

/// A finished report document: title plus ordered two-column sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub report_id: String,
    pub title: String,
    pub format: ReportFormat,
    /// Value date the figures were computed for.
    pub generated_at: chrono::NaiveDate,
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Fixed descriptive file name, e.g. `recria_pasto.pdf`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", REPORT_FILE_STEM, self.format.extension())
    }
}

/// One titled section rendered as a bordered label/value grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

impl ReportRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        ReportRow {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    /// HTML format
    Html,
    /// JSON format
    Json,
    /// PDF format; typesetting happens at the sink, the document carries
    /// the tabular layout and the naming convention.
    Pdf,
}

impl ReportFormat {
    /// Get file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Pdf => "pdf",
        }
    }

    /// Get MIME type
    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Html => "text/html",
            ReportFormat::Json => "application/json",
            ReportFormat::Pdf => "application/pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_naming_convention() {
        assert_eq!(ReportFormat::Pdf.extension(), "pdf");
        assert_eq!(ReportFormat::Pdf.mime_type(), "application/pdf");
    }

    #[test]
    fn test_file_name_uses_fixed_stem() {
        let report = Report {
            report_id: "test".to_string(),
            title: REPORT_TITLE.to_string(),
            format: ReportFormat::Pdf,
            generated_at: chrono::NaiveDate::from_ymd_opt(2025, 3, 30).unwrap(),
            sections: Vec::new(),
        };
        assert_eq!(report.file_name(), "recria_pasto.pdf");
    }
}
