//! Reserved words of the analyzed C-like source
//!
//! The data-type subset drives declaration recognition; the full set routes
//! tokens to the keyword bucket.
use serde::{Deserialize, Serialize};

/// Reserved keywords recognized by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === DATA TYPES AND QUALIFIERS ===
    Int,
    Float,
    Char,
    Double,
    Void,
    Unsigned,
    Const,
    Static,
    Long,
    Short,
    Signed,

    // === CONTROL FLOW ===
    Return,
    If,
    Else,
    For,
    While,
    Do,
    Switch,
    Case,
    Default,
    Break,
    Continue,

    // === TYPE DEFINITIONS ===
    Struct,
    Typedef,

    // === PREPROCESSOR WORDS ===
    Include,
    Define,
}

impl Keyword {
    /// Every keyword, in declaration order
    pub const ALL: [Keyword; 26] = [
        Self::Int,
        Self::Float,
        Self::Char,
        Self::Double,
        Self::Void,
        Self::Unsigned,
        Self::Const,
        Self::Static,
        Self::Long,
        Self::Short,
        Self::Signed,
        Self::Return,
        Self::If,
        Self::Else,
        Self::For,
        Self::While,
        Self::Do,
        Self::Switch,
        Self::Case,
        Self::Default,
        Self::Break,
        Self::Continue,
        Self::Struct,
        Self::Typedef,
        Self::Include,
        Self::Define,
    ];

    /// Exact spelling in source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Char => "char",
            Self::Double => "double",
            Self::Void => "void",
            Self::Unsigned => "unsigned",
            Self::Const => "const",
            Self::Static => "static",
            Self::Long => "long",
            Self::Short => "short",
            Self::Signed => "signed",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::While => "while",
            Self::Do => "do",
            Self::Switch => "switch",
            Self::Case => "case",
            Self::Default => "default",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Struct => "struct",
            Self::Typedef => "typedef",
            Self::Include => "include",
            Self::Define => "define",
        }
    }

    /// Parse keyword from string. Matching is case-sensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.as_str() == s)
    }

    /// Whether this keyword can start a declaration's type run
    pub const fn is_data_type(self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Float
                | Self::Char
                | Self::Double
                | Self::Void
                | Self::Unsigned
                | Self::Const
                | Self::Static
                | Self::Long
                | Self::Short
                | Self::Signed
        )
    }

    pub const fn is_control_flow(self) -> bool {
        matches!(
            self,
            Self::Return
                | Self::If
                | Self::Else
                | Self::For
                | Self::While
                | Self::Do
                | Self::Switch
                | Self::Case
                | Self::Default
                | Self::Break
                | Self::Continue
        )
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check if a lexeme is a reserved keyword
pub fn is_reserved_keyword(s: &str) -> bool {
    Keyword::from_str(s).is_some()
}

/// Check if a lexeme belongs to the data-type subset
pub fn is_data_type_keyword(s: &str) -> bool {
    Keyword::from_str(s).is_some_and(Keyword::is_data_type)
}
