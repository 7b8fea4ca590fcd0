use assert_matches::assert_matches;
use lexical_analyzer::config::runtime::{ReportFormat, RuntimeConfig};
use lexical_analyzer::file_processor::FileProcessorError;
use lexical_analyzer::pipeline::{self, PipelineError};
use lexical_analyzer::report::ReportError;
use std::fs;
use tempfile::tempdir;

const SOURCE: &str = "\
/* header comment
   spanning
   lines */
int count12@r = 10, bad;   // trailing note
float @ratio45@r = 2.5;
void tokyo23@r(int a);
if (count12@r >= 3) { x += 1; }
";

fn config(format: ReportFormat) -> RuntimeConfig {
    let mut config = RuntimeConfig::default();
    config.report.format = format;
    config.interactive.enabled = false;
    config
}

#[test]
fn text_report_covers_every_section() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, SOURCE).unwrap();

    let result = pipeline::process_file_with_config(
        input.to_str().unwrap(),
        &output,
        &config(ReportFormat::Text),
    )
    .unwrap();

    assert!(result.has_invalid_identifiers());
    assert_eq!(result.snapshot.symbols.len(), 3);
    assert_eq!(result.snapshot.metrics.lines_in_block_comment, 1);

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains(
        "Valid Variables/Identifiers (Count: 3): [count12@r, @ratio45@r, tokyo23@r]\n"
    ));
    assert!(report.contains("Invalid Variables/Identifiers (Count: 1): [bad]\n"));
    assert!(report.contains("Keywords: [int, float, void, if]\n"));
    assert!(report.contains("Multi-char Operators: [>=, +=]\n"));
    assert!(report.contains("Numeric: [10, 2.5, 3, 1]\n"));
    assert!(report.contains("| @ratio45@r      | float                 | 2.5            | 5    |\n"));
    assert!(report.contains("| tokyo23@r       | void                  | -              | 6    |\n"));
    assert!(!report.contains("header"));
    assert!(!report.contains("trailing"));
    assert!(report.ends_with("***************************************************\n"));
}

#[test]
fn json_report_is_parseable() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("report.json");
    fs::write(&input, SOURCE).unwrap();

    pipeline::process_file_with_config(
        input.to_str().unwrap(),
        &output,
        &config(ReportFormat::Json),
    )
    .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["identifiers"]["valid_count"], 3);
    assert_eq!(value["symbol_table"][2]["kind"], "function");
    assert_eq!(value["tokens"]["keywords"][0], "int");
}

#[test]
fn empty_input_still_produces_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "").unwrap();

    let result = pipeline::process_file_with_config(
        input.to_str().unwrap(),
        &output,
        &config(ReportFormat::Text),
    )
    .unwrap();

    assert!(!result.has_invalid_identifiers());
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("Valid Variables/Identifiers (Count: 0): []\n"));
}

#[test]
fn missing_input_is_an_open_failure() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("nope.txt");
    let output = dir.path().join("output.txt");

    let result = pipeline::process_file_with_config(
        input.to_str().unwrap(),
        &output,
        &config(ReportFormat::Text),
    );

    assert_matches!(
        result,
        Err(PipelineError::FileProcessing(FileProcessorError::FileNotFound { .. }))
    );
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_an_open_failure() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("no_such_dir").join("output.txt");
    fs::write(&input, SOURCE).unwrap();

    let result = pipeline::process_file_with_config(
        input.to_str().unwrap(),
        &output,
        &config(ReportFormat::Text),
    );

    assert_matches!(
        result,
        Err(PipelineError::Report(ReportError::OutputUnavailable { .. }))
    );
    assert!(result.err().unwrap().is_open_failure());
}

#[test]
fn latin1_input_is_decoded() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, b"char c = '\xe9';\nint abcd12@r;\n").unwrap();

    let mut config = config(ReportFormat::Text);
    config.file_processor.allow_latin1_fallback = true;

    let result =
        pipeline::process_file_with_config(input.to_str().unwrap(), &output, &config).unwrap();
    assert_eq!(result.snapshot.symbols.len(), 1);
    assert!(result.snapshot.identifiers.invalid.contains("c"));
}
