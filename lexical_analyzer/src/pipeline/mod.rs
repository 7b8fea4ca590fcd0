mod error;
mod info;
mod result;
mod validation;

// Re-export public types
pub use error::PipelineError;
pub use info::{get_pipeline_info, PipelineInfo};
pub use result::PipelineResult;
pub use validation::validate_pipeline;

use crate::config::runtime::RuntimeConfig;
use crate::file_processor::create_processor_from_preferences;
use crate::logging;
use crate::report::{self, ReportWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Analyze `input_path` and write the report to `output_path` using preferences from the environment
pub fn process_file(
    input_path: &str,
    output_path: impl AsRef<Path>,
) -> Result<PipelineResult, PipelineError> {
    process_file_with_config(input_path, output_path, &RuntimeConfig::default())
}

/// Analyze `input_path` and write the report to `output_path`
///
/// The input is read and the output opened before any analysis runs, so a
/// missing input or an unwritable destination fails without partial work.
pub fn process_file_with_config(
    input_path: &str,
    output_path: impl AsRef<Path>,
    config: &RuntimeConfig,
) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();
    let output_path = output_path.as_ref();

    logging::with_file_context(PathBuf::from(input_path), 0, || {
        crate::log_info!("Starting lexical analysis pipeline",
            "file" => input_path,
            "report" => output_path.display(),
            "format" => config.report.format.as_str()
        );

        // Stage 1: read the source and open the destination
        let processor = create_processor_from_preferences(&config.file_processor);
        let file_result = processor.process_file(input_path)?;
        let writer = ReportWriter::create(output_path)?;

        // Stage 2: analysis
        let snapshot = crate::lexical::analyze_file_result_with_preferences(
            &file_result,
            config.lexical.clone(),
        );

        // Stage 3: report
        let contents = report::render(input_path, &snapshot, &config.report)?;
        let report_path = writer.write_report(&contents)?;

        let result = PipelineResult::new(
            snapshot,
            file_result.metadata,
            report_path,
            start_time.elapsed(),
        );
        result.log_success(input_path);

        Ok(result)
    })
}
