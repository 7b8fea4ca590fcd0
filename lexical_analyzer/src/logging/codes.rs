//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and classification functions.
//! Lexical and identifier codes describe conditions that are absorbed into the analysis
//! results; only file processing and report codes can stop a run.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
    pub const EVENT_LIMIT_REACHED: Code = Code::new("ERR003");
}

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const EMPTY_FILE: Code = Code::new("E008");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
    pub const TOO_MANY_LINES: Code = Code::new("E013");
    pub const LARGE_FILE: Code = Code::new("E014");
}

/// Lexical conditions absorbed by the tokenizer and comment normalizer
pub mod lexical {
    use super::Code;

    pub const UNTERMINATED_STRING: Code = Code::new("E020");
    pub const UNTERMINATED_CHAR: Code = Code::new("E021");
    pub const UNTERMINATED_BLOCK_COMMENT: Code = Code::new("E022");
    pub const UNCLASSIFIED_CHARACTER: Code = Code::new("E023");
    pub const LONG_LINE: Code = Code::new("E024");
    pub const DENSE_LINE: Code = Code::new("E025");
}

/// Identifier grammar outcomes
pub mod identifiers {
    use super::Code;

    pub const INVALID_IDENTIFIER: Code = Code::new("E030");
}

/// Symbol table conditions
pub mod symbols {
    use super::Code;

    pub const DUPLICATE_DECLARATION: Code = Code::new("E040");
}

/// Report output error codes
pub mod report {
    use super::Code;

    pub const OUTPUT_UNAVAILABLE: Code = Code::new("E050");
    pub const WRITE_FAILED: Code = Code::new("E051");
    pub const SERIALIZATION_FAILED: Code = Code::new("E052");
}

/// Interactive validator error codes
pub mod interactive {
    use super::Code;

    pub const INPUT_READ_FAILED: Code = Code::new("E060");
    pub const OUTPUT_WRITE_FAILED: Code = Code::new("E061");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const LEXICAL_ANALYSIS_COMPLETE: Code = Code::new("I020");
    pub const DECLARATION_SCAN_COMPLETE: Code = Code::new("I030");
    pub const REPORT_WRITTEN: Code = Code::new("I050");
    pub const PIPELINE_COMPLETE: Code = Code::new("I060");
    pub const INTERACTIVE_SESSION_COMPLETE: Code = Code::new("I070");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            // System errors
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Internal analyzer error",
                "Report this issue with the input that triggered it",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "System initialization failed",
                "Check configuration and environment variables",
            ),
            ErrorMetadata::new(
                "ERR003",
                "System",
                Severity::Low,
                true,
                false,
                "Per-file event limit reached; further events were dropped",
                "Fix the reported issues and run again",
            ),
            // File processing errors
            ErrorMetadata::new(
                "E005",
                "FileProcessing",
                Severity::High,
                false,
                true,
                "Source file not found",
                "Check the input path and that the file exists",
            ),
            ErrorMetadata::new(
                "E007",
                "FileProcessing",
                Severity::High,
                false,
                true,
                "Source file exceeds the configured size limit",
                "Split the file or build with a profile that allows larger inputs",
            ),
            ErrorMetadata::new(
                "E008",
                "FileProcessing",
                Severity::Low,
                true,
                false,
                "Source file is empty",
                "An empty report is produced; check the input path if this is unexpected",
            ),
            ErrorMetadata::new(
                "E009",
                "FileProcessing",
                Severity::High,
                false,
                true,
                "Permission denied while accessing file",
                "Check file permissions",
            ),
            ErrorMetadata::new(
                "E010",
                "FileProcessing",
                Severity::Medium,
                true,
                false,
                "Source file is not valid UTF-8",
                "Bytes were decoded as Latin-1; convert the file to UTF-8 for exact output",
            ),
            ErrorMetadata::new(
                "E011",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "I/O error during file operation",
                "Check disk space, permissions, and file system integrity",
            ),
            ErrorMetadata::new(
                "E012",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "Invalid file path provided",
                "Provide a path to a regular file",
            ),
            ErrorMetadata::new(
                "E013",
                "FileProcessing",
                Severity::High,
                false,
                true,
                "Source file has more lines than the configured limit",
                "Split the file or build with a profile that allows more lines",
            ),
            ErrorMetadata::new(
                "E014",
                "FileProcessing",
                Severity::Low,
                true,
                false,
                "Source file is larger than the large-file threshold",
                "No action required; analysis may take longer",
            ),
            // Lexical conditions
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::Low,
                true,
                false,
                "String literal not terminated before end of line",
                "Close the string literal with a double quote",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Character literal not terminated",
                "Close the character literal with a single quote",
            ),
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Block comment still open at end of file",
                "Close the block comment with */",
            ),
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Character matches no token rule",
                "The character is reported under Others",
            ),
            ErrorMetadata::new(
                "E024",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Line longer than the long-line threshold",
                "No action required",
            ),
            ErrorMetadata::new(
                "E025",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Line produced more tokens than the warning threshold",
                "No action required",
            ),
            // Identifier outcomes
            ErrorMetadata::new(
                "E030",
                "Identifiers",
                Severity::Low,
                true,
                false,
                "Declared name does not match the identifier grammar",
                "Rename to: optional #/@/!, 4-7 lowercase letters, 2-4 digits, then @r",
            ),
            // Symbol table
            ErrorMetadata::new(
                "E040",
                "Symbols",
                Severity::Low,
                true,
                false,
                "Name already declared; the first declaration is kept",
                "Remove the duplicate declaration",
            ),
            // Report output
            ErrorMetadata::new(
                "E050",
                "Report",
                Severity::High,
                false,
                true,
                "Report destination could not be opened",
                "Check the output path and directory permissions",
            ),
            ErrorMetadata::new(
                "E051",
                "Report",
                Severity::High,
                false,
                true,
                "Writing the report failed",
                "Check disk space and permissions",
            ),
            ErrorMetadata::new(
                "E052",
                "Report",
                Severity::High,
                false,
                true,
                "Report serialization failed",
                "Report this issue with the input that triggered it",
            ),
            // Interactive validator
            ErrorMetadata::new(
                "E060",
                "Interactive",
                Severity::Medium,
                false,
                false,
                "Reading from the terminal failed",
                "Restart the session",
            ),
            ErrorMetadata::new(
                "E061",
                "Interactive",
                Severity::Medium,
                false,
                false,
                "Writing to the terminal failed",
                "Restart the session",
            ),
            // Success codes
            ErrorMetadata::new(
                "I004",
                "Success",
                Severity::Low,
                true,
                false,
                "System initialization completed",
                "Continue",
            ),
            ErrorMetadata::new(
                "I006",
                "Success",
                Severity::Low,
                true,
                false,
                "Source file read successfully",
                "Continue to lexical analysis",
            ),
            ErrorMetadata::new(
                "I020",
                "Success",
                Severity::Low,
                true,
                false,
                "Lexical analysis completed",
                "Continue to report rendering",
            ),
            ErrorMetadata::new(
                "I030",
                "Success",
                Severity::Low,
                true,
                false,
                "Declaration scan completed",
                "Continue",
            ),
            ErrorMetadata::new(
                "I050",
                "Success",
                Severity::Low,
                true,
                false,
                "Report written",
                "Review the report",
            ),
            ErrorMetadata::new(
                "I060",
                "Success",
                Severity::Low,
                true,
                false,
                "Analysis pipeline completed",
                "Continue",
            ),
            ErrorMetadata::new(
                "I070",
                "Success",
                Severity::Low,
                true,
                false,
                "Interactive validation session ended",
                "Continue",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_code_is_registered() {
        let declared = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            system::EVENT_LIMIT_REACHED,
            file_processing::FILE_NOT_FOUND,
            file_processing::FILE_TOO_LARGE,
            file_processing::EMPTY_FILE,
            file_processing::PERMISSION_DENIED,
            file_processing::INVALID_ENCODING,
            file_processing::IO_ERROR,
            file_processing::INVALID_PATH,
            file_processing::TOO_MANY_LINES,
            file_processing::LARGE_FILE,
            lexical::UNTERMINATED_STRING,
            lexical::UNTERMINATED_CHAR,
            lexical::UNTERMINATED_BLOCK_COMMENT,
            lexical::UNCLASSIFIED_CHARACTER,
            lexical::LONG_LINE,
            lexical::DENSE_LINE,
            identifiers::INVALID_IDENTIFIER,
            symbols::DUPLICATE_DECLARATION,
            report::OUTPUT_UNAVAILABLE,
            report::WRITE_FAILED,
            report::SERIALIZATION_FAILED,
            interactive::INPUT_READ_FAILED,
            interactive::OUTPUT_WRITE_FAILED,
            success::SYSTEM_INITIALIZATION_COMPLETED,
            success::FILE_PROCESSING_SUCCESS,
            success::LEXICAL_ANALYSIS_COMPLETE,
            success::DECLARATION_SCAN_COMPLETE,
            success::REPORT_WRITTEN,
            success::PIPELINE_COMPLETE,
            success::INTERACTIVE_SESSION_COMPLETE,
        ];

        for code in declared {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn lexical_conditions_never_halt() {
        for code in ["E020", "E021", "E022", "E023", "E030", "E040"] {
            assert!(is_recoverable(code));
            assert!(!requires_halt(code));
        }
    }

    #[test]
    fn io_failures_halt() {
        assert!(requires_halt("E005"));
        assert!(requires_halt("E050"));
        assert_eq!(get_category("E051"), "Report");
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(get_description("Z999"), "Unknown error");
        assert_eq!(get_severity("Z999"), Severity::Medium);
    }
}
