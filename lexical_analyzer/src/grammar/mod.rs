//! Language vocabulary: reserved keywords and the data-type subset

pub mod keywords;

pub use keywords::{is_data_type_keyword, is_reserved_keyword, Keyword};
