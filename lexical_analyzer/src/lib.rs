// Internal modules
pub mod config;
pub mod file_processor;
pub mod grammar;
pub mod identifier;
pub mod interactive;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod symbols;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use identifier::{is_valid as is_valid_identifier, Verdict};
pub use interactive::{run_session, SessionSummary};
pub use lexical::{AnalysisSnapshot, LexicalAnalyzer};
pub use pipeline::{PipelineError, PipelineResult};
pub use report::{render_json, render_text};
pub use symbols::{SymbolRecord, SymbolTable};
pub use tokens::{categorize, TokenCategory};
