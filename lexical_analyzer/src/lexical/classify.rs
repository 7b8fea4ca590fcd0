//! Character and lexeme predicates over the fixed symbol alphabet

use crate::grammar::is_reserved_keyword;

/// Two-character operators, matched before any single-character rule
pub const MULTI_CHAR_OPERATORS: [&str; 12] = [
    "++", "--", "==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=", "/=",
];

pub const OPERATOR_CHARS: &str = "+-*/%=<>!&|^~";
pub const BRACKET_CHARS: &str = "(){}[]";
pub const SEPARATOR_CHARS: &str = ",;:";
pub const SPECIAL_SYMBOL_CHARS: &str = "#.";

pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

pub fn is_bracket_char(c: char) -> bool {
    BRACKET_CHARS.contains(c)
}

pub fn is_separator_char(c: char) -> bool {
    SEPARATOR_CHARS.contains(c)
}

pub fn is_special_symbol_char(c: char) -> bool {
    SPECIAL_SYMBOL_CHARS.contains(c)
}

/// Any character that always forms a one-character token
pub fn is_symbol_char(c: char) -> bool {
    is_operator_char(c) || is_separator_char(c) || is_bracket_char(c) || is_special_symbol_char(c)
}

pub fn is_multi_char_operator(lexeme: &str) -> bool {
    MULTI_CHAR_OPERATORS.contains(&lexeme)
}

/// A single operator character or a multi-character operator
pub fn is_operator_lexeme(lexeme: &str) -> bool {
    if is_multi_char_operator(lexeme) {
        return true;
    }
    let mut chars = lexeme.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_operator_char(c))
}

/// Whitespace as the C locale defines it (includes vertical tab)
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Characters that may open a word run. `#` and `!` are listed for
/// completeness; the symbol rule claims them first.
pub fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '#' | '@' | '!')
}

pub fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '!')
}

pub fn is_number_continue(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Whether a token that failed the identifier grammar still looks like an
/// attempted name (as opposed to punctuation, literals or keywords)
pub fn is_plausible_name(lexeme: &str) -> bool {
    let Some(first) = lexeme.chars().next() else {
        return false;
    };

    !is_reserved_keyword(lexeme)
        && !is_operator_lexeme(lexeme)
        && !is_bracket_char(first)
        && !is_separator_char(first)
        && !is_special_symbol_char(first)
        && !first.is_ascii_digit()
        && first != '"'
        && first != '\''
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_classes_are_disjoint() {
        for c in OPERATOR_CHARS.chars() {
            assert!(!is_bracket_char(c) && !is_separator_char(c) && !is_special_symbol_char(c));
        }
        for c in BRACKET_CHARS.chars() {
            assert!(!is_separator_char(c) && !is_special_symbol_char(c));
        }
        assert!(!is_separator_char('#'));
    }

    #[test]
    fn operator_lexemes() {
        assert!(is_operator_lexeme("+"));
        assert!(is_operator_lexeme("&&"));
        assert!(is_operator_lexeme("!"));
        assert!(!is_operator_lexeme("+++"));
        assert!(!is_operator_lexeme("->"));
        assert!(!is_operator_lexeme(""));
    }

    #[test]
    fn word_runs() {
        assert!(is_word_start('@'));
        assert!(is_word_start('_'));
        assert!(!is_word_start('1'));
        assert!(is_word_continue('!'));
        assert!(!is_word_continue('#'));
        assert!(!is_word_continue('é'));
    }

    #[test]
    fn plausible_names() {
        assert!(is_plausible_name("count"));
        assert!(is_plausible_name("@bad"));
        assert!(is_plausible_name("_tmp"));
        assert!(!is_plausible_name("while"));
        assert!(!is_plausible_name("="));
        assert!(!is_plausible_name("=="));
        assert!(!is_plausible_name("("));
        assert!(!is_plausible_name(";"));
        assert!(!is_plausible_name("#"));
        assert!(!is_plausible_name("42"));
        assert!(!is_plausible_name("\"text\""));
        assert!(!is_plausible_name("'c'"));
        assert!(!is_plausible_name(""));
    }

    #[test]
    fn whitespace_matches_c_locale() {
        for c in [' ', '\t', '\r', '\x0B', '\x0C'] {
            assert!(is_whitespace(c));
        }
        assert!(!is_whitespace('\u{A0}'));
    }
}
