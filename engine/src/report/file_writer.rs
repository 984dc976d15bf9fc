// File-based report sink: renders the document and writes it under the
// configured output directory, named by the fixed stem + format extension.

use std::path::{Path, PathBuf};

use crate::error::EngineError;

use super::{render, Report, ReportSink};

pub struct FileWriter {
    output_dir: PathBuf,
}

impl FileWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        FileWriter {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ReportSink for FileWriter {
    fn send(&self, report: &Report) -> Result<(), EngineError> {
        let bytes = render(report)?;
        let path = self.output_dir.join(report.file_name());
        std::fs::write(&path, bytes)?;
        tracing::info!(
            report_id = %report.report_id,
            path = %path.display(),
            "Report written"
        );
        Ok(())
    }
}
