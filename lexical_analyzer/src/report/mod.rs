//! Report renderers and the report writer
//!
//! The output file is opened before analysis starts so that an unwritable
//! destination is reported before any work is done.

pub mod json;
pub mod text;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::runtime::{ReportFormat, ReportPreferences};
use crate::lexical::AnalysisSnapshot;
use crate::logging::codes;
use crate::{log_error, log_success};

pub use json::{render_json, AnalysisReport};
pub use text::render_text;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Could not open {path}: {source}")]
    OutputUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report to {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReportError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ReportError::OutputUnavailable { .. } => codes::report::OUTPUT_UNAVAILABLE,
            ReportError::WriteFailed { .. } => codes::report::WRITE_FAILED,
            ReportError::Serialization(_) => codes::report::SERIALIZATION_FAILED,
        }
    }
}

/// Render a snapshot in the requested format
pub fn render(
    source_name: &str,
    snapshot: &AnalysisSnapshot,
    preferences: &ReportPreferences,
) -> Result<String, ReportError> {
    match preferences.format {
        ReportFormat::Text => Ok(render_text(snapshot)),
        ReportFormat::Json => {
            render_json(source_name, snapshot, preferences.pretty_json).map_err(|e| {
                let error = ReportError::from(e);
                log_error!(error.error_code(), "Report serialization failed",
                    "error" => &error);
                error
            })
        }
    }
}

/// Destination for one report
#[derive(Debug)]
pub struct ReportWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl ReportWriter {
    /// Create (truncate) the output file
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        match File::create(path) {
            Ok(file) => Ok(Self {
                path: path.to_path_buf(),
                out: BufWriter::new(file),
            }),
            Err(source) => {
                let error = ReportError::OutputUnavailable {
                    path: path.display().to_string(),
                    source,
                };
                log_error!(error.error_code(), "Cannot open report destination",
                    "path" => path.display());
                Err(error)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a rendered report and flush
    pub fn write_report(mut self, contents: &str) -> Result<PathBuf, ReportError> {
        let result = self
            .out
            .write_all(contents.as_bytes())
            .and_then(|_| self.out.flush());

        match result {
            Ok(()) => {
                log_success!(codes::success::REPORT_WRITTEN, "Report written",
                    "path" => self.path.display(),
                    "bytes" => contents.len());
                Ok(self.path)
            }
            Err(source) => {
                let error = ReportError::WriteFailed {
                    path: self.path.display().to_string(),
                    source,
                };
                log_error!(error.error_code(), "Failed to write report",
                    "path" => self.path.display());
                Err(error)
            }
        }
    }
}

/// Initialize report module logging validation (for system startup)
pub fn init_report_logging() -> Result<(), String> {
    let test_codes = [
        codes::report::OUTPUT_UNAVAILABLE,
        codes::report::WRITE_FAILED,
        codes::report::SERIALIZATION_FAILED,
    ];

    for code in &test_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Report error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn writes_text_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");

        let writer = ReportWriter::create(&path).unwrap();
        let contents = render_text(&AnalysisSnapshot::default());
        let written = writer.write_report(&contents).unwrap();

        assert_eq!(written, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), contents);
    }

    #[test]
    fn unwritable_destination_fails_up_front() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("output.txt");

        let result = ReportWriter::create(&path);
        assert_matches!(result, Err(ReportError::OutputUnavailable { .. }));
        assert_eq!(result.err().unwrap().error_code().as_str(), "E050");
    }

    #[test]
    fn render_dispatches_on_format() {
        let snapshot = AnalysisSnapshot::default();
        let text = ReportPreferences {
            format: ReportFormat::Text,
            pretty_json: false,
        };
        let json = ReportPreferences {
            format: ReportFormat::Json,
            pretty_json: false,
        };

        assert!(render("in.txt", &snapshot, &text)
            .unwrap()
            .starts_with("****"));
        assert!(render("in.txt", &snapshot, &json).unwrap().starts_with('{'));
    }

    #[test]
    fn test_init_logging() {
        assert!(init_report_logging().is_ok());
    }
}
