//! Plain-text report layout

use std::fmt::Write;

use crate::config::compile_time::report::{
    LINE_COLUMN_WIDTH, NAME_COLUMN_WIDTH, TYPE_COLUMN_WIDTH, VALUE_COLUMN_WIDTH,
};
use crate::lexical::AnalysisSnapshot;
use crate::symbols::SymbolRecord;

const BANNER_RULE: &str = "***************************************************";
const TITLE: &str = "*          LEXICAL ANALYSIS REPORT                 *";
const SUBTITLE: &str = "*         Tourist Management System Code           *";
const END_TITLE: &str = "*                 END OF REPORT                    *";
const CATEGORY_HEADING: &str = "=========== TOKENS BY CATEGORY ===========";
const SYMBOL_HEADING: &str = "=========== SYMBOL TABLE ===========";
const TABLE_RULE: &str = "---------------------------------------------------------------";
const TABLE_HEADER: &str = "| Name            | DataType               | Value          | Line |";

/// `[a, b, c]`
fn bracketed<'a>(items: impl Iterator<Item = &'a str>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(", "))
}

fn symbol_row(record: &SymbolRecord) -> String {
    format!(
        "| {:<name_w$} | {:<type_w$} | {:<value_w$} | {:<line_w$} |",
        record.name,
        record.declared_type,
        record.value(),
        record.declared_at_line,
        name_w = NAME_COLUMN_WIDTH,
        type_w = TYPE_COLUMN_WIDTH,
        value_w = VALUE_COLUMN_WIDTH,
        line_w = LINE_COLUMN_WIDTH,
    )
}

/// Render the full text report
pub fn render_text(snapshot: &AnalysisSnapshot) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, snapshot);
    out
}

fn write_report(out: &mut String, snapshot: &AnalysisSnapshot) -> std::fmt::Result {
    let identifiers = &snapshot.identifiers;
    let buckets = &snapshot.buckets;

    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{SUBTITLE}")?;
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out)?;

    writeln!(
        out,
        "Valid Variables/Identifiers (Count: {}): {}\n",
        identifiers.valid.len(),
        bracketed(identifiers.valid.iter())
    )?;
    writeln!(
        out,
        "Invalid Variables/Identifiers (Count: {}): {}\n",
        identifiers.invalid.len(),
        bracketed(identifiers.invalid.iter())
    )?;

    writeln!(out, "{CATEGORY_HEADING}\n")?;

    let listings = [
        ("Keywords", bracketed(buckets.keywords.iter())),
        ("Identifiers", bracketed(identifiers.valid.iter())),
        ("Numeric", bracketed(buckets.numerics.iter())),
        (
            "String Literals",
            bracketed(buckets.quoted_literals.iter()),
        ),
        ("Multi-char Operators", bracketed(buckets.multi_char_operators.iter())),
        ("Operators", bracketed(buckets.operators.iter())),
        ("Separators", bracketed(buckets.separators.iter())),
        ("Brackets", bracketed(buckets.brackets.iter())),
        ("Special Symbols", bracketed(buckets.special_symbols.iter())),
        ("Others", bracketed(buckets.others.iter())),
    ];
    for (label, listing) in listings {
        writeln!(out, "{label}: {listing}\n")?;
    }

    writeln!(out, "{SYMBOL_HEADING}")?;
    writeln!(out, "{TABLE_RULE}")?;
    writeln!(out, "{TABLE_HEADER}")?;
    writeln!(out, "{TABLE_RULE}")?;
    for record in snapshot.symbols.iter() {
        writeln!(out, "{}", symbol_row(record))?;
    }
    writeln!(out, "{TABLE_RULE}")?;

    writeln!(out)?;
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "{END_TITLE}")?;
    writeln!(out, "{BANNER_RULE}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::LexicalAnalyzer;

    #[test]
    fn rules_have_fixed_widths() {
        assert_eq!(BANNER_RULE.len(), 51);
        assert_eq!(TITLE.len(), 52);
        assert_eq!(SUBTITLE.len(), 52);
        assert_eq!(END_TITLE.len(), 52);
        assert_eq!(TABLE_RULE.len(), 63);
    }

    #[test]
    fn empty_report_layout() {
        let report = render_text(&AnalysisSnapshot::default());
        let expected = "\
***************************************************
*          LEXICAL ANALYSIS REPORT                 *
*         Tourist Management System Code           *
***************************************************

Valid Variables/Identifiers (Count: 0): []

Invalid Variables/Identifiers (Count: 0): []

=========== TOKENS BY CATEGORY ===========

Keywords: []

Identifiers: []

Numeric: []

String Literals: []

Multi-char Operators: []

Operators: []

Separators: []

Brackets: []

Special Symbols: []

Others: []

=========== SYMBOL TABLE ===========
---------------------------------------------------------------
| Name            | DataType               | Value          | Line |
---------------------------------------------------------------
---------------------------------------------------------------

***************************************************
*                 END OF REPORT                    *
***************************************************
";
        assert_eq!(report, expected);
    }

    #[test]
    fn populated_report_sections() {
        let source = "int count12@r = 10, bad;\nvoid tokyo23@r();\nchar msg = \"hi\", c = 'x';\n";
        let snapshot = LexicalAnalyzer::new().analyze_source(source);
        let report = render_text(&snapshot);

        assert!(report.contains("Valid Variables/Identifiers (Count: 2): [count12@r, tokyo23@r]\n\n"));
        assert!(report.contains("Invalid Variables/Identifiers (Count: 3): [bad, msg, c]\n\n"));
        assert!(report.contains("Keywords: [int, void, char]\n\n"));
        assert!(report.contains("Identifiers: [count12@r, tokyo23@r]\n\n"));
        assert!(report.contains("String Literals: [\"hi\", 'x']\n\n"));
        assert!(report.contains("Separators: [,, ;]\n\n"));
        assert!(report.contains("Brackets: [(, )]\n\n"));
        assert!(report.contains(
            "| count12@r       | int                   | 10             | 1    |\n"
        ));
        assert!(report.contains(
            "| tokyo23@r       | void                  | -              | 2    |\n"
        ));
    }

    #[test]
    fn quoted_literals_listed_in_first_seen_order() {
        let snapshot = LexicalAnalyzer::new().analyze_source("c = 'x';\ns = \"hi\";\nd = 'x';\n");
        let report = render_text(&snapshot);
        assert!(report.contains("String Literals: ['x', \"hi\"]\n\n"));
    }

    #[test]
    fn long_values_are_not_truncated() {
        let row = symbol_row(&SymbolRecord::variable(
            "abcdefg1234@r",
            "unsigned long",
            Some("\"a rather long literal\""),
            120,
        ));
        assert_eq!(
            row,
            "| abcdefg1234@r   | unsigned long         | \"a rather long literal\" | 120  |"
        );
    }
}
