// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProcessorPreferences {
    /// Whether to enable detailed performance logging
    pub enable_performance_logging: bool,

    /// Decode non-UTF-8 input byte-per-char instead of failing
    pub allow_latin1_fallback: bool,
}

impl Default for FileProcessorPreferences {
    fn default() -> Self {
        Self {
            enable_performance_logging: env_flag(env_vars::ENABLE_PERFORMANCE_LOGGING, true),
            allow_latin1_fallback: env_flag(env_vars::ALLOW_LATIN1_FALLBACK, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to collect per-line token metrics
    pub collect_detailed_metrics: bool,

    /// Whether to log every recognized declaration at debug level
    pub log_declarations: bool,

    /// Whether to log each invalid identifier as it is recorded
    pub log_invalid_identifiers: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env_flag(env_vars::LEXICAL_DETAILED_METRICS, true),
            log_declarations: env_flag(env_vars::LEXICAL_LOG_DECLARATIONS, false),
            log_invalid_identifiers: env_flag(env_vars::LEXICAL_LOG_INVALID_IDENTIFIERS, true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

/// Parse report format from string (CLI flag or environment variable)
pub fn parse_report_format(format: &str) -> Option<ReportFormat> {
    match format.to_lowercase().as_str() {
        "text" | "txt" => Some(ReportFormat::Text),
        "json" => Some(ReportFormat::Json),
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPreferences {
    pub format: ReportFormat,

    /// Pretty-print JSON reports
    pub pretty_json: bool,
}

impl Default for ReportPreferences {
    fn default() -> Self {
        Self {
            format: env::var(env_vars::REPORT_FORMAT)
                .ok()
                .and_then(|v| parse_report_format(&v))
                .unwrap_or_default(),
            pretty_json: env_flag(env_vars::REPORT_PRETTY_JSON, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractivePreferences {
    /// Whether the validation prompt runs after analysis
    pub enabled: bool,
}

impl Default for InteractivePreferences {
    fn default() -> Self {
        Self {
            enabled: env_flag(env_vars::INTERACTIVE, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,

    /// Whether to include performance metrics in logs
    pub log_performance_events: bool,

    /// Whether to enable cargo-style error reporting
    pub enable_cargo_style_output: bool,

    /// Whether to include file context in log messages
    pub include_file_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_flag(env_vars::LOGGING_USE_STRUCTURED, false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
            log_performance_events: env_flag(env_vars::LOGGING_LOG_PERFORMANCE, true),
            enable_cargo_style_output: env_flag(env_vars::LOGGING_CARGO_STYLE, true),
            include_file_context: env_flag(env_vars::LOGGING_INCLUDE_FILE_CONTEXT, true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub file_processor: FileProcessorPreferences,
    pub lexical: LexicalPreferences,
    pub report: ReportPreferences,
    pub interactive: InteractivePreferences,
    pub logging: LoggingPreferences,
}

/// Environment variable names for configuration
pub mod env_vars {
    // File Processor
    pub const ENABLE_PERFORMANCE_LOGGING: &str = "LEXAN_ENABLE_PERFORMANCE_LOGGING";
    pub const ALLOW_LATIN1_FALLBACK: &str = "LEXAN_ALLOW_LATIN1_FALLBACK";

    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "LEXAN_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_LOG_DECLARATIONS: &str = "LEXAN_LEXICAL_LOG_DECLARATIONS";
    pub const LEXICAL_LOG_INVALID_IDENTIFIERS: &str = "LEXAN_LEXICAL_LOG_INVALID_IDENTIFIERS";

    // Report
    pub const REPORT_FORMAT: &str = "LEXAN_REPORT_FORMAT";
    pub const REPORT_PRETTY_JSON: &str = "LEXAN_REPORT_PRETTY_JSON";

    // Interactive
    pub const INTERACTIVE: &str = "LEXAN_INTERACTIVE";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "LEXAN_LOGGING_USE_STRUCTURED";
    pub const LOGGING_MIN_LEVEL: &str = "LEXAN_LOGGING_MIN_LEVEL";
    pub const LOGGING_LOG_PERFORMANCE: &str = "LEXAN_LOGGING_LOG_PERFORMANCE";
    pub const LOGGING_CARGO_STYLE: &str = "LEXAN_LOGGING_CARGO_STYLE";
    pub const LOGGING_INCLUDE_FILE_CONTEXT: &str = "LEXAN_LOGGING_INCLUDE_FILE_CONTEXT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_report_format_parsing() {
        assert_eq!(parse_report_format("json"), Some(ReportFormat::Json));
        assert_eq!(parse_report_format("TEXT"), Some(ReportFormat::Text));
        assert_eq!(parse_report_format("txt"), Some(ReportFormat::Text));
        assert_eq!(parse_report_format("xml"), None);
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }

    #[test]
    fn test_env_var_names_share_prefix() {
        for name in [
            env_vars::ENABLE_PERFORMANCE_LOGGING,
            env_vars::REPORT_FORMAT,
            env_vars::INTERACTIVE,
            env_vars::LOGGING_MIN_LEVEL,
        ] {
            assert!(name.starts_with("LEXAN_"));
        }
    }
}
