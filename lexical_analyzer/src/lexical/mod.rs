//! Lexical analysis: character classes, comment stripping, tokenizing and
//! the per-file session that ties them to declarations and categories.

pub mod analyzer;
pub mod classify;
pub mod comments;
pub mod tokenizer;

use crate::config::compile_time::lexical::{LONG_LINE_THRESHOLD, TOKEN_WARNING_THRESHOLD};
use crate::config::runtime::LexicalPreferences;
use crate::file_processor::FileProcessingResult;

pub use analyzer::{AnalysisSnapshot, LexicalAnalyzer, LexicalMetrics};
pub use comments::{strip_comments, CommentNormalizer, CommentState, StrippedLine};
pub use tokenizer::{tokenize, LineTokenizer, RawToken, TokenShape};

/// Analyze a processed source file with default preferences
pub fn analyze_file_result(file_result: &FileProcessingResult) -> AnalysisSnapshot {
    analyze_file_result_with_preferences(file_result, LexicalPreferences::default())
}

/// Analyze a processed source file with custom runtime preferences
pub fn analyze_file_result_with_preferences(
    file_result: &FileProcessingResult,
    preferences: LexicalPreferences,
) -> AnalysisSnapshot {
    crate::log_debug!("Starting lexical analysis",
        "file" => file_result.metadata.path.display(),
        "lines" => file_result.metadata.line_count,
        "bytes" => file_result.metadata.size
    );

    LexicalAnalyzer::with_preferences(preferences).analyze_source(&file_result.source)
}

/// Initialize lexical analysis module validation (for system startup)
pub fn init_lexical_analysis_logging() -> Result<(), String> {
    let test_codes = [
        crate::logging::codes::lexical::UNTERMINATED_STRING,
        crate::logging::codes::lexical::UNTERMINATED_CHAR,
        crate::logging::codes::lexical::UNTERMINATED_BLOCK_COMMENT,
        crate::logging::codes::lexical::UNCLASSIFIED_CHARACTER,
        crate::logging::codes::lexical::LONG_LINE,
        crate::logging::codes::lexical::DENSE_LINE,
    ];

    for code in &test_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    if LONG_LINE_THRESHOLD == 0 || TOKEN_WARNING_THRESHOLD == 0 {
        return Err("Lexical warning thresholds cannot be zero".to_string());
    }

    crate::log_debug!("Lexical thresholds initialized",
        "long_line_threshold" => LONG_LINE_THRESHOLD,
        "token_warning_threshold" => TOKEN_WARNING_THRESHOLD
    );

    Ok(())
}
