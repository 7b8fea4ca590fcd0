//! Source location tracking
//!
//! Positions are line-oriented: `offset` is the byte offset inside the
//! physical line, `line` and `column` are 1-based.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line, column, and byte offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Byte offset from start of the line (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number in characters (1-based)
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// First position of a line
    pub fn line_start(line: u32) -> Self {
        Self::new(0, line, 1)
    }

    /// Advance position over a string on the same line
    pub fn advance_str(self, s: &str) -> Self {
        Self {
            offset: self.offset + s.len(),
            line: self.line,
            column: self.column + s.chars().count() as u32,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "Span start must not be after end"
        );
        Self { start, end }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Get the byte length of this span
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Get the text for this span from the line it was taken from
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start.offset..self.end.offset]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A value with its source location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    /// Map the value while preserving the span
    pub fn map<U, F>(self, f: F) -> Spanned<U>
    where
        F: FnOnce(T) -> U,
    {
        Spanned {
            value: f(self.value),
            span: self.span,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_chars_and_bytes_separately() {
        let start = Position::line_start(3);
        let end = start.advance_str("né");
        assert_eq!(end.offset, 3);
        assert_eq!(end.column, 3);
        assert_eq!(end.line, 3);
    }

    #[test]
    fn span_slices_its_line() {
        let line = "int abcd12@r;";
        let start = Position::line_start(1).advance_str("int ");
        let end = start.advance_str("abcd12@r");
        let span = Span::new(start, end);

        assert_eq!(span.slice(line), "abcd12@r");
        assert_eq!(span.len(), 8);
        assert_eq!(span.to_string(), "1:5-13");
    }

    #[test]
    fn spanned_map_keeps_location() {
        let span = Span::new(Position::line_start(2), Position::new(1, 2, 2));
        let spanned = Spanned::new("x", span).map(str::len);
        assert_eq!(spanned.value, 1);
        assert_eq!(spanned.span, span);
    }
}
