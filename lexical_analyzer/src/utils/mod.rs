//! Shared primitive types: source spans and the ordered set used by every
//! accumulator in the analyzer.

pub mod ordered_set;
pub mod span;

pub use ordered_set::OrderedSet;
pub use span::{Position, Span, Spanned};
