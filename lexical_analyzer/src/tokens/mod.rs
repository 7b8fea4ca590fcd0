//! Token categories and the buckets that accumulate them
//!
//! Every lexeme produced by the tokenizer is routed to one of ten
//! categories. Declared names are reported separately through the
//! identifier sets, so there is no identifier category here.

pub mod buckets;
pub mod category;

pub use buckets::CategoryBuckets;
pub use category::{categorize, TokenCategory};
