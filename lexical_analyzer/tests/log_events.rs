//! Warnings emitted during a run, captured with an in-memory logger.
//! Kept in its own test binary because the global logger can only be set once.

use lexical_analyzer::config::runtime::RuntimeConfig;
use lexical_analyzer::logging::{self, codes, LogLevel, LoggingService, MemoryLogger};
use lexical_analyzer::pipeline;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn malformed_input_is_reported_as_warnings() {
    let memory = Arc::new(MemoryLogger::new());
    let service = Arc::new(LoggingService::new(memory.clone(), LogLevel::Debug));
    logging::init_global_logging_with_service(service).unwrap();

    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(
        &input,
        "char s = \"open;\nint $cost12@r;\nint a, bb12@r = 'q;\n/* never closed\n",
    )
    .unwrap();

    let mut config = RuntimeConfig::default();
    config.interactive.enabled = false;
    let result =
        pipeline::process_file_with_config(input.to_str().unwrap(), &output, &config).unwrap();

    assert!(result.snapshot.unterminated_block_comment);
    assert!(memory.has_warning_with_code(codes::lexical::UNTERMINATED_STRING));
    assert!(memory.has_warning_with_code(codes::lexical::UNCLASSIFIED_CHARACTER));
    assert!(memory.has_warning_with_code(codes::lexical::UNTERMINATED_CHAR));
    assert!(memory.has_warning_with_code(codes::lexical::UNTERMINATED_BLOCK_COMMENT));
    assert!(memory.has_success_with_code(codes::success::PIPELINE_COMPLETE));
    assert!(memory.has_success_with_code(codes::success::DECLARATION_SCAN_COMPLETE));
    assert!(memory
        .get_events()
        .iter()
        .all(|event| !event.is_error()));

    let string_warning = memory
        .get_events_with_code(codes::lexical::UNTERMINATED_STRING)
        .remove(0);
    let span = string_warning.span.unwrap();
    assert_eq!(span.start.line, 1);
    assert_eq!(span.start.column, 10);

    let summary = logging::get_processing_summary();
    assert!(summary.has_warnings());
    assert!(!summary.has_errors());
    assert!(!logging::get_file_errors(&input).iter().any(|e| e.is_error()));
}
