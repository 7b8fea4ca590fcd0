//! Token categorizer
//!
//! Routes a lexeme to exactly one category by testing the rules in a fixed
//! priority order. Classification looks at the text only.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grammar::is_reserved_keyword;
use crate::lexical::classify::{
    is_bracket_char, is_multi_char_operator, is_operator_lexeme, is_separator_char,
    is_special_symbol_char,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    Keyword,
    MultiCharOperator,
    Operator,
    Separator,
    Bracket,
    SpecialSymbol,
    StringLiteral,
    CharLiteral,
    Numeric,
    Unclassified,
}

impl TokenCategory {
    /// Categories in priority order
    pub const ALL: [TokenCategory; 10] = [
        Self::Keyword,
        Self::MultiCharOperator,
        Self::Operator,
        Self::Separator,
        Self::Bracket,
        Self::SpecialSymbol,
        Self::StringLiteral,
        Self::CharLiteral,
        Self::Numeric,
        Self::Unclassified,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::MultiCharOperator => "multi_char_operator",
            Self::Operator => "operator",
            Self::Separator => "separator",
            Self::Bracket => "bracket",
            Self::SpecialSymbol => "special_symbol",
            Self::StringLiteral => "string_literal",
            Self::CharLiteral => "char_literal",
            Self::Numeric => "numeric",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn single_char(lexeme: &str) -> Option<char> {
    let mut chars = lexeme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// A lone `"` counts as a string literal since it both starts and ends
/// with a quote.
fn is_quoted(lexeme: &str, quote: char) -> bool {
    lexeme.starts_with(quote) && lexeme.ends_with(quote)
}

/// Category of a lexeme
pub fn categorize(lexeme: &str) -> TokenCategory {
    let single = single_char(lexeme);

    if is_reserved_keyword(lexeme) {
        TokenCategory::Keyword
    } else if is_multi_char_operator(lexeme) {
        TokenCategory::MultiCharOperator
    } else if is_operator_lexeme(lexeme) {
        TokenCategory::Operator
    } else if single.is_some_and(is_separator_char) {
        TokenCategory::Separator
    } else if single.is_some_and(is_bracket_char) {
        TokenCategory::Bracket
    } else if single.is_some_and(is_special_symbol_char) {
        TokenCategory::SpecialSymbol
    } else if is_quoted(lexeme, '"') {
        TokenCategory::StringLiteral
    } else if is_quoted(lexeme, '\'') {
        TokenCategory::CharLiteral
    } else if lexeme.starts_with(|c: char| c.is_ascii_digit()) {
        TokenCategory::Numeric
    } else {
        TokenCategory::Unclassified
    }
}
