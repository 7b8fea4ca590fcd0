use crate::file_processor::FileProcessorError;
use crate::interactive::InteractiveError;
use crate::report::ReportError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Report generation failed: {0}")]
    Report(#[from] ReportError),

    #[error("Interactive validation failed: {0}")]
    Interactive(#[from] InteractiveError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    /// True when the failure is about opening the input or output file
    pub fn is_open_failure(&self) -> bool {
        matches!(
            self,
            PipelineError::FileProcessing(_)
                | PipelineError::Report(ReportError::OutputUnavailable { .. })
        )
    }
}
