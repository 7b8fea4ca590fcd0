//! JSON report

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lexical::{AnalysisSnapshot, LexicalMetrics};
use crate::symbols::SymbolRecord;
use crate::tokens::CategoryBuckets;
use crate::utils::OrderedSet;

#[derive(Debug, Serialize)]
pub struct IdentifierSection<'a> {
    pub valid_count: usize,
    pub valid: &'a OrderedSet,
    pub invalid_count: usize,
    pub invalid: &'a OrderedSet,
}

/// Serializable view over an analysis snapshot
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub source: &'a str,
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: &'static str,
    pub identifiers: IdentifierSection<'a>,
    pub tokens: &'a CategoryBuckets,
    pub symbol_table: Vec<&'a SymbolRecord>,
    pub metrics: &'a LexicalMetrics,
    pub unterminated_block_comment: bool,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(source: &'a str, snapshot: &'a AnalysisSnapshot) -> Self {
        Self {
            source,
            generated_at: Utc::now(),
            analyzer_version: crate::config::build_info::crate_version(),
            identifiers: IdentifierSection {
                valid_count: snapshot.identifiers.valid.len(),
                valid: &snapshot.identifiers.valid,
                invalid_count: snapshot.identifiers.invalid.len(),
                invalid: &snapshot.identifiers.invalid,
            },
            tokens: &snapshot.buckets,
            symbol_table: snapshot.symbols.iter().collect(),
            metrics: &snapshot.metrics,
            unterminated_block_comment: snapshot.unterminated_block_comment,
        }
    }
}

pub fn render_json(
    source: &str,
    snapshot: &AnalysisSnapshot,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let report = AnalysisReport::new(source, snapshot);
    if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::LexicalAnalyzer;
    use serde_json::Value;

    #[test]
    fn json_mirrors_snapshot() {
        let snapshot =
            LexicalAnalyzer::new().analyze_source("int count12@r = 10, bad;\nvoid tokyo23@r();\n");
        let rendered = render_json("input.txt", &snapshot, false).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["source"], "input.txt");
        assert_eq!(value["identifiers"]["valid_count"], 2);
        assert_eq!(value["identifiers"]["invalid"][0], "bad");
        assert_eq!(value["tokens"]["keywords"][1], "void");
        assert_eq!(value["symbol_table"][0]["name"], "count12@r");
        assert_eq!(value["symbol_table"][0]["initializer"], "10");
        assert_eq!(value["symbol_table"][1]["initializer"], Value::Null);
        assert_eq!(value["symbol_table"][1]["kind"], "function");
        assert_eq!(value["metrics"]["function_declaration_lines"], 1);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn pretty_output_is_multiline() {
        let snapshot = AnalysisSnapshot::default();
        let rendered = render_json("empty.txt", &snapshot, true).unwrap();
        assert!(rendered.contains('\n'));
        assert_eq!(
            serde_json::from_str::<Value>(&rendered).unwrap()["symbol_table"],
            Value::Array(vec![])
        );
    }
}
