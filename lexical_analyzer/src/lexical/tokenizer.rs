//! Line tokenizer
//!
//! Splits one comment-free line into lexemes. Every lexeme is a slice of the
//! input line; nothing is allocated while scanning.

use std::iter::Peekable;
use std::str::CharIndices;

use super::classify::{
    is_multi_char_operator, is_number_continue, is_symbol_char, is_whitespace, is_word_continue,
    is_word_start,
};
use crate::utils::{Position, Span, Spanned};

/// How a lexeme was recognized by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenShape {
    MultiCharOperator,
    /// Single operator, separator, bracket or special character
    Symbol,
    Word,
    Number,
    StringLiteral { terminated: bool },
    CharLiteral { terminated: bool },
    Unclassified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub text: &'a str,
    pub shape: TokenShape,
}

/// Iterator over the lexemes of a single line
pub struct LineTokenizer<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Position of the first byte of `text` in the physical line
    origin: Position,
    cursor: Position,
}

impl<'a> LineTokenizer<'a> {
    pub fn new(line: &'a str, line_number: u32) -> Self {
        Self::starting_at(line, Position::line_start(line_number))
    }

    /// Tokenize a fragment of a line whose first byte sits at `origin`
    pub fn starting_at(text: &'a str, origin: Position) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
            origin,
            cursor: origin,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if !is_whitespace(ch) {
                break;
            }
            self.bump();
        }
    }

    fn bump(&mut self) -> Option<char> {
        let (_, ch) = self.chars.next()?;
        let mut buf = [0u8; 4];
        self.cursor = self.cursor.advance_str(ch.encode_utf8(&mut buf));
        Some(ch)
    }

    fn bump_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if !predicate(ch) {
                break;
            }
            self.bump();
        }
    }

    fn bump_if(&mut self, expected: char) -> bool {
        if self.chars.peek().map(|&(_, c)| c) == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn two_char_operator_at(&self, start: usize) -> Option<&'a str> {
        let mut rest = self.text[start..].char_indices();
        rest.next()?;
        let (second_offset, second) = rest.next()?;
        let candidate = &self.text[start..start + second_offset + second.len_utf8()];
        is_multi_char_operator(candidate).then_some(candidate)
    }

    fn scan_string(&mut self) -> TokenShape {
        self.bump_while(|c| c != '"');
        TokenShape::StringLiteral {
            terminated: self.bump_if('"'),
        }
    }

    /// Opening quote, at most one non-quote character, optional closing quote
    fn scan_char(&mut self) -> TokenShape {
        if let Some(&(_, ch)) = self.chars.peek() {
            if ch != '\'' {
                self.bump();
            }
        }
        TokenShape::CharLiteral {
            terminated: self.bump_if('\''),
        }
    }
}

impl<'a> Iterator for LineTokenizer<'a> {
    type Item = Spanned<RawToken<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let &(start_offset, first) = self.chars.peek()?;
        let start = self.cursor;

        let shape = if let Some(op) = self.two_char_operator_at(start_offset) {
            for _ in op.chars() {
                self.bump();
            }
            TokenShape::MultiCharOperator
        } else {
            self.bump();
            match first {
                c if is_symbol_char(c) => TokenShape::Symbol,
                c if is_word_start(c) => {
                    self.bump_while(is_word_continue);
                    TokenShape::Word
                }
                c if c.is_ascii_digit() => {
                    self.bump_while(is_number_continue);
                    TokenShape::Number
                }
                '"' => self.scan_string(),
                '\'' => self.scan_char(),
                _ => TokenShape::Unclassified,
            }
        };

        let span = Span::new(start, self.cursor);
        let base = self.origin.offset;
        let text = &self.text[start.offset - base..self.cursor.offset - base];
        Some(Spanned::new(RawToken { text, shape }, span))
    }
}

/// Lexemes of a line, in order
pub fn tokenize(line: &str) -> Vec<&str> {
    LineTokenizer::new(line, 1)
        .map(|token| token.value.text)
        .collect()
}
