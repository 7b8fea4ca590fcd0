//! Per-file analysis session
//!
//! Drives the comment normalizer, tokenizer, declaration recognizer and
//! categorizer over a source one line at a time. All accumulated state is
//! owned here and handed out as a snapshot when the source is exhausted.

use serde::{Deserialize, Serialize};

use super::comments::CommentNormalizer;
use super::tokenizer::{LineTokenizer, RawToken, TokenShape};
use crate::config::compile_time::lexical::{LONG_LINE_THRESHOLD, TOKEN_WARNING_THRESHOLD};
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::symbols::{
    DeclarationKind, DeclarationRecognizer, IdentifierSets, LineDeclarations, NameOutcome,
    SymbolTable,
};
use crate::tokens::CategoryBuckets;
use crate::utils::{Position, Spanned};
use crate::{log_debug, log_success, log_warning};

/// Counters gathered while analyzing one source
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalMetrics {
    pub lines_read: usize,
    /// Lines swallowed whole by a block comment
    pub lines_in_block_comment: usize,
    /// Lines that produced no tokens at all
    pub lines_without_tokens: usize,
    pub total_tokens: usize,
    pub function_declaration_lines: usize,
    pub variable_declaration_lines: usize,
    pub unterminated_strings: usize,
    pub unterminated_chars: usize,
    pub unclassified_characters: usize,

    // Detailed metrics
    pub longest_line: usize,
    pub max_tokens_per_line: usize,
}

impl LexicalMetrics {
    fn record_token(&mut self, shape: TokenShape) {
        self.total_tokens += 1;
        match shape {
            TokenShape::StringLiteral { terminated: false } => self.unterminated_strings += 1,
            TokenShape::CharLiteral { terminated: false } => self.unterminated_chars += 1,
            TokenShape::Unclassified => self.unclassified_characters += 1,
            _ => {}
        }
    }

    fn record_declaration(&mut self, kind: DeclarationKind) {
        match kind {
            DeclarationKind::Function => self.function_declaration_lines += 1,
            DeclarationKind::Variables => self.variable_declaration_lines += 1,
        }
    }

    pub fn declaration_lines(&self) -> usize {
        self.function_declaration_lines + self.variable_declaration_lines
    }
}

/// Everything accumulated over one source, read by the report renderers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub identifiers: IdentifierSets,
    pub buckets: CategoryBuckets,
    pub symbols: SymbolTable,
    pub metrics: LexicalMetrics,
    /// The source ended inside a block comment
    pub unterminated_block_comment: bool,
}

/// Line-by-line lexical analysis session
pub struct LexicalAnalyzer {
    comments: CommentNormalizer,
    identifiers: IdentifierSets,
    buckets: CategoryBuckets,
    symbols: SymbolTable,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            comments: CommentNormalizer::new(),
            identifiers: IdentifierSets::new(),
            buckets: CategoryBuckets::new(),
            symbols: SymbolTable::new(),
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Analyze a whole source and return the accumulated state
    pub fn analyze_source(mut self, source: &str) -> AnalysisSnapshot {
        for (index, line) in source.lines().enumerate() {
            let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
            self.analyze_line(line_number, line);
        }
        self.finish()
    }

    /// Analyze one physical line (without its newline). Returns the number
    /// of tokens it produced.
    pub fn analyze_line(&mut self, line_number: u32, raw: &str) -> usize {
        self.metrics.lines_read += 1;
        let line_length = raw.chars().count();

        if line_length > LONG_LINE_THRESHOLD {
            log_warning!(codes::lexical::LONG_LINE, "Line exceeds length threshold",
                "line" => line_number,
                "length" => line_length,
                "threshold" => LONG_LINE_THRESHOLD
            );
        }

        let stripped = self.comments.normalize(raw);
        if stripped.consumed {
            self.metrics.lines_in_block_comment += 1;
        }

        let origin = Position::line_start(line_number).advance_str(&raw[..stripped.offset]);
        let tokens: Vec<Spanned<RawToken<'_>>> =
            LineTokenizer::starting_at(stripped.text, origin).collect();

        if tokens.is_empty() {
            self.metrics.lines_without_tokens += 1;
            return 0;
        }

        for token in &tokens {
            self.metrics.record_token(token.value.shape);
            self.report_malformed(token);
        }

        if self.preferences.collect_detailed_metrics {
            self.metrics.longest_line = self.metrics.longest_line.max(line_length);
            self.metrics.max_tokens_per_line = self.metrics.max_tokens_per_line.max(tokens.len());
        }

        if tokens.len() > TOKEN_WARNING_THRESHOLD {
            log_warning!(codes::lexical::DENSE_LINE, "Line has an unusually high token count",
                "line" => line_number,
                "tokens" => tokens.len(),
                "threshold" => TOKEN_WARNING_THRESHOLD
            );
        }

        let lexemes: Vec<&str> = tokens.iter().map(|token| token.value.text).collect();

        let declarations = DeclarationRecognizer::new(&mut self.identifiers, &mut self.symbols)
            .process_line(&lexemes, line_number);
        if let Some(declarations) = declarations {
            self.record_declarations(&declarations, line_number);
        }

        for lexeme in &lexemes {
            self.buckets.record(lexeme);
        }

        tokens.len()
    }

    /// Close the session. An open block comment is closed implicitly.
    pub fn finish(self) -> AnalysisSnapshot {
        let unterminated_block_comment = self.comments.state().is_inside_block();
        if unterminated_block_comment {
            log_warning!(
                codes::lexical::UNTERMINATED_BLOCK_COMMENT,
                "Block comment is not closed before end of file",
                "lines_read" => self.metrics.lines_read
            );
        }

        log_success!(codes::success::DECLARATION_SCAN_COMPLETE,
            "Declaration scan completed",
            "function_lines" => self.metrics.function_declaration_lines,
            "variable_lines" => self.metrics.variable_declaration_lines
        );

        log_success!(codes::success::LEXICAL_ANALYSIS_COMPLETE,
            "Lexical analysis completed",
            "lines" => self.metrics.lines_read,
            "tokens" => self.metrics.total_tokens,
            "declaration_lines" => self.metrics.declaration_lines(),
            "symbols" => self.symbols.len(),
            "valid_identifiers" => self.identifiers.valid.len(),
            "invalid_identifiers" => self.identifiers.invalid.len()
        );

        AnalysisSnapshot {
            identifiers: self.identifiers,
            buckets: self.buckets,
            symbols: self.symbols,
            metrics: self.metrics,
            unterminated_block_comment,
        }
    }

    fn report_malformed(&self, token: &Spanned<RawToken<'_>>) {
        let lexeme = token.value.text;
        match token.value.shape {
            TokenShape::StringLiteral { terminated: false } => {
                log_warning!(codes::lexical::UNTERMINATED_STRING,
                    "String literal runs to end of line",
                    span = token.span,
                    "lexeme" => lexeme
                );
            }
            TokenShape::CharLiteral { terminated: false } => {
                log_warning!(codes::lexical::UNTERMINATED_CHAR,
                    "Character literal is not closed",
                    span = token.span,
                    "lexeme" => lexeme
                );
            }
            TokenShape::Unclassified => {
                log_warning!(codes::lexical::UNCLASSIFIED_CHARACTER,
                    "Character matches no token rule",
                    span = token.span,
                    "character" => lexeme.escape_default()
                );
            }
            _ => {}
        }
    }

    fn record_declarations(&mut self, declarations: &LineDeclarations, line_number: u32) {
        self.metrics.record_declaration(declarations.head.kind);

        if self.preferences.log_declarations {
            log_debug!("Declaration recognized",
                "line" => line_number,
                "kind" => format!("{:?}", declarations.head.kind),
                "type" => declarations.head.declared_type.as_str(),
                "valid" => declarations.valid_count(),
                "invalid" => declarations.invalid_count()
            );
        }

        if self.preferences.log_invalid_identifiers {
            for outcome in &declarations.names {
                if let NameOutcome::Invalid { name } = outcome {
                    log_warning!(codes::identifiers::INVALID_IDENTIFIER,
                        "Declared name does not match the identifier grammar",
                        "line" => line_number,
                        "name" => name
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(source: &str) -> AnalysisSnapshot {
        LexicalAnalyzer::new().analyze_source(source)
    }

    fn listed(set: &crate::utils::OrderedSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn declarations_and_buckets_from_one_pass() {
        let snapshot = analyze("int count12@r = 10;\nvoid tokyo23@r();\n");

        assert_eq!(listed(&snapshot.identifiers.valid), vec!["count12@r", "tokyo23@r"]);
        assert_eq!(listed(&snapshot.buckets.keywords), vec!["int", "void"]);
        assert_eq!(listed(&snapshot.buckets.numerics), vec!["10"]);
        assert_eq!(listed(&snapshot.buckets.brackets), vec!["(", ")"]);
        assert_eq!(listed(&snapshot.buckets.others), vec!["count12@r", "tokyo23@r"]);
        assert_eq!(snapshot.symbols.len(), 2);
        assert_eq!(snapshot.metrics.function_declaration_lines, 1);
        assert_eq!(snapshot.metrics.variable_declaration_lines, 1);
    }

    #[test]
    fn block_comment_blanks_interior_lines() {
        let source = "int first12@r; /* start\nint hidden12@r;\nend */ int after12@r;\n";
        let snapshot = analyze(source);

        assert_eq!(
            listed(&snapshot.identifiers.valid),
            vec!["first12@r", "after12@r"]
        );
        assert!(snapshot.symbols.get("hidden12@r").is_none());
        assert_eq!(snapshot.metrics.lines_in_block_comment, 1);
        assert!(!snapshot.unterminated_block_comment);
        assert_eq!(snapshot.buckets.keywords.len(), 1);
    }

    #[test]
    fn text_before_block_close_is_dropped() {
        let snapshot = analyze("/* a\nend */ x = 5;\n");
        assert!(snapshot.identifiers.valid.is_empty());
        assert_eq!(listed(&snapshot.buckets.numerics), vec!["5"]);
        assert_eq!(listed(&snapshot.buckets.others), vec!["x"]);
    }

    #[test]
    fn comment_only_line_contributes_nothing() {
        let snapshot = analyze("// comment text\n");
        assert_eq!(snapshot.buckets.total_distinct(), 0);
        assert_eq!(snapshot.metrics.lines_without_tokens, 1);
        assert_eq!(snapshot.metrics.total_tokens, 0);
    }

    #[test]
    fn unterminated_block_comment_is_flagged() {
        let snapshot = analyze("int a;\n/* open\nint b;\n");
        assert!(snapshot.unterminated_block_comment);
        assert_eq!(snapshot.metrics.lines_read, 3);
    }

    #[test]
    fn malformed_literals_are_counted_and_absorbed() {
        let snapshot = analyze("char msg = \"open\nchar c = 'x\n$\n");
        assert_eq!(snapshot.metrics.unterminated_strings, 1);
        assert_eq!(snapshot.metrics.unterminated_chars, 1);
        assert_eq!(snapshot.metrics.unclassified_characters, 1);
        assert!(snapshot.buckets.others.contains("\"open"));
        assert!(snapshot.buckets.others.contains("$"));
    }

    #[test]
    fn detailed_metrics_follow_preferences() {
        let quiet = LexicalPreferences {
            collect_detailed_metrics: false,
            log_declarations: false,
            log_invalid_identifiers: false,
        };
        let snapshot = LexicalAnalyzer::with_preferences(quiet).analyze_source("int a, b, c;\n");
        assert_eq!(snapshot.metrics.longest_line, 0);
        assert_eq!(snapshot.metrics.total_tokens, 7);

        let mut analyzer = LexicalAnalyzer::new();
        assert_eq!(analyzer.analyze_line(1, "int a, b, c;"), 7);
        assert_eq!(analyzer.metrics().max_tokens_per_line, 7);
        assert_eq!(analyzer.metrics().longest_line, 12);
    }

    #[test]
    fn crlf_lines_are_handled() {
        let snapshot = analyze("int abcd12@r;\r\nfloat efgh34@r;\r\n");
        assert_eq!(listed(&snapshot.identifiers.valid), vec!["abcd12@r", "efgh34@r"]);
    }

    #[test]
    fn invalid_names_are_recorded_once() {
        let snapshot = analyze("int bad;\nfloat bad, worse;\n");
        assert_eq!(listed(&snapshot.identifiers.invalid), vec!["bad", "worse"]);
    }
}
