use crate::file_processor::FileMetadata;
use crate::lexical::AnalysisSnapshot;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one analyze-and-report run
#[derive(Debug)]
pub struct PipelineResult {
    pub snapshot: AnalysisSnapshot,
    pub file_metadata: FileMetadata,
    pub report_path: PathBuf,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn new(
        snapshot: AnalysisSnapshot,
        file_metadata: FileMetadata,
        report_path: PathBuf,
        processing_duration: Duration,
    ) -> Self {
        Self {
            snapshot,
            file_metadata,
            report_path,
            processing_duration,
        }
    }

    pub fn has_invalid_identifiers(&self) -> bool {
        self.snapshot.identifiers.has_invalid()
    }

    pub fn log_success(&self, file_path: &str) {
        let seconds = self.processing_duration.as_secs_f64().max(f64::EPSILON);
        crate::log_performance!(
            crate::logging::codes::success::PIPELINE_COMPLETE,
            "Lexical analysis pipeline succeeded",
            duration = self.processing_duration,
            "file" => file_path,
            "report" => self.report_path.display(),
            "symbols" => self.snapshot.symbols.len(),
            "invalid_identifiers" => self.snapshot.identifiers.invalid.len(),
            "processing_rate_bytes_per_sec" => format!("{:.0}",
                self.file_metadata.size as f64 / seconds),
            "processing_rate_tokens_per_sec" => format!("{:.0}",
                self.snapshot.metrics.total_tokens as f64 / seconds)
        );
    }
}
