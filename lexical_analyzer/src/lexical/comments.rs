//! Comment normalizer
//!
//! Strips `/* ... */` and `//` comments one physical line at a time. The
//! "inside a block comment" flag is threaded through explicitly.
//!
//! Order matters: the block close is handled first, then a block open
//! truncates the line, then a line comment truncates what is left. A block
//! that opens and closes on the same line therefore still leaves the state
//! inside a block, and a `/*` that appears after `//` still opens a block.

/// Cross-line comment state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentState {
    #[default]
    Code,
    InsideBlock,
}

impl CommentState {
    pub fn is_inside_block(self) -> bool {
        self == CommentState::InsideBlock
    }
}

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";
const LINE_COMMENT: &str = "//";

/// Result of stripping one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrippedLine<'a> {
    /// Text left after removing comments
    pub text: &'a str,
    /// Byte offset of `text` within the original line
    pub offset: usize,
    /// State to carry into the next line
    pub state: CommentState,
    /// The whole line was inside a block comment
    pub consumed: bool,
}

/// Strip comments from one line given the state left by the previous line
pub fn strip_comments(state: CommentState, line: &str) -> StrippedLine<'_> {
    let mut text = line;
    let mut offset = 0;
    let mut state = state;

    if state.is_inside_block() {
        match text.find(BLOCK_CLOSE) {
            Some(close) => {
                offset = close + BLOCK_CLOSE.len();
                text = &text[offset..];
                state = CommentState::Code;
            }
            None => {
                return StrippedLine {
                    text: "",
                    offset: line.len(),
                    state,
                    consumed: true,
                }
            }
        }
    }

    if let Some(open) = text.find(BLOCK_OPEN) {
        text = &text[..open];
        state = CommentState::InsideBlock;
    }

    if let Some(start) = text.find(LINE_COMMENT) {
        text = &text[..start];
    }

    StrippedLine {
        text,
        offset,
        state,
        consumed: false,
    }
}

/// Stateful wrapper for callers that walk a file line by line
#[derive(Debug, Default)]
pub struct CommentNormalizer {
    state: CommentState,
}

impl CommentNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CommentState {
        self.state
    }

    pub fn normalize<'a>(&mut self, line: &'a str) -> StrippedLine<'a> {
        let stripped = strip_comments(self.state, line);
        self.state = stripped.state;
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_all(lines: &[&str]) -> (Vec<String>, CommentState) {
        let mut normalizer = CommentNormalizer::new();
        let out = lines
            .iter()
            .map(|line| normalizer.normalize(line).text.to_string())
            .collect();
        (out, normalizer.state())
    }

    #[test]
    fn line_comment_truncates() {
        let stripped = strip_comments(CommentState::Code, "int x; // note");
        assert_eq!(stripped.text, "int x; ");
        assert_eq!(stripped.state, CommentState::Code);
    }

    #[test]
    fn comment_only_line_is_empty() {
        let stripped = strip_comments(CommentState::Code, "// comment text");
        assert_eq!(stripped.text, "");
        assert!(!stripped.consumed);
    }

    #[test]
    fn multi_line_block_blanks_interior_and_keeps_tail() {
        let (lines, state) = strip_all(&[
            "int a; /* start",
            "float hidden;",
            "still hidden",
            "end */ char tail;",
        ]);

        assert_eq!(lines, vec!["int a; ", "", "", " char tail;"]);
        assert_eq!(state, CommentState::Code);
    }

    #[test]
    fn unterminated_block_stays_inside() {
        let (lines, state) = strip_all(&["/* never closed", "int x;"]);
        assert_eq!(lines, vec!["", ""]);
        assert!(state.is_inside_block());
    }

    #[test]
    fn same_line_block_leaves_state_inside() {
        let (lines, state) = strip_all(&["a /* b */ c", "int hidden;", "*/ int shown;"]);
        assert_eq!(lines, vec!["a ", "", " int shown;"]);
        assert_eq!(state, CommentState::Code);
    }

    #[test]
    fn block_open_after_line_comment_still_opens_block() {
        let stripped = strip_comments(CommentState::Code, "x = 1; // see /* here");
        assert_eq!(stripped.text, "x = 1; ");
        assert!(stripped.state.is_inside_block());
    }

    #[test]
    fn line_comment_after_block_close_is_removed() {
        let stripped = strip_comments(CommentState::InsideBlock, "*/ int y; // trailing");
        assert_eq!(stripped.text, " int y; ");
        assert_eq!(stripped.offset, 2);
        assert_eq!(stripped.state, CommentState::Code);
    }

    #[test]
    fn consumed_flag_only_for_fully_hidden_lines() {
        assert!(strip_comments(CommentState::InsideBlock, "body").consumed);
        assert!(!strip_comments(CommentState::InsideBlock, "*/").consumed);
    }
}
