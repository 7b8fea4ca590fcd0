//! Per-category lexeme accumulators

use serde::{Deserialize, Serialize};

use super::category::{categorize, TokenCategory};
use crate::utils::OrderedSet;

/// One deduplicated, first-seen-ordered bucket per token category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBuckets {
    pub keywords: OrderedSet,
    pub multi_char_operators: OrderedSet,
    pub operators: OrderedSet,
    pub separators: OrderedSet,
    pub brackets: OrderedSet,
    pub special_symbols: OrderedSet,
    pub string_literals: OrderedSet,
    pub char_literals: OrderedSet,
    pub numerics: OrderedSet,
    pub others: OrderedSet,
    /// String and character literals together, in first-seen order
    #[serde(default)]
    pub quoted_literals: OrderedSet,
}

impl CategoryBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categorize and record a lexeme, returning its category
    pub fn record(&mut self, lexeme: &str) -> TokenCategory {
        let category = categorize(lexeme);
        self.bucket_mut(category).insert(lexeme);
        if matches!(
            category,
            TokenCategory::StringLiteral | TokenCategory::CharLiteral
        ) {
            self.quoted_literals.insert(lexeme);
        }
        category
    }

    pub fn bucket(&self, category: TokenCategory) -> &OrderedSet {
        match category {
            TokenCategory::Keyword => &self.keywords,
            TokenCategory::MultiCharOperator => &self.multi_char_operators,
            TokenCategory::Operator => &self.operators,
            TokenCategory::Separator => &self.separators,
            TokenCategory::Bracket => &self.brackets,
            TokenCategory::SpecialSymbol => &self.special_symbols,
            TokenCategory::StringLiteral => &self.string_literals,
            TokenCategory::CharLiteral => &self.char_literals,
            TokenCategory::Numeric => &self.numerics,
            TokenCategory::Unclassified => &self.others,
        }
    }

    fn bucket_mut(&mut self, category: TokenCategory) -> &mut OrderedSet {
        match category {
            TokenCategory::Keyword => &mut self.keywords,
            TokenCategory::MultiCharOperator => &mut self.multi_char_operators,
            TokenCategory::Operator => &mut self.operators,
            TokenCategory::Separator => &mut self.separators,
            TokenCategory::Bracket => &mut self.brackets,
            TokenCategory::SpecialSymbol => &mut self.special_symbols,
            TokenCategory::StringLiteral => &mut self.string_literals,
            TokenCategory::CharLiteral => &mut self.char_literals,
            TokenCategory::Numeric => &mut self.numerics,
            TokenCategory::Unclassified => &mut self.others,
        }
    }

    /// Distinct lexemes across all buckets
    pub fn total_distinct(&self) -> usize {
        TokenCategory::ALL
            .iter()
            .map(|&category| self.bucket(category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_distinct() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_into_matching_bucket() {
        let mut buckets = CategoryBuckets::new();
        for lexeme in ["int", "x", "=", "5", ";", "int", "y", "=", "5", ";"] {
            buckets.record(lexeme);
        }

        assert_eq!(buckets.keywords.iter().collect::<Vec<_>>(), vec!["int"]);
        assert_eq!(buckets.operators.iter().collect::<Vec<_>>(), vec!["="]);
        assert_eq!(buckets.numerics.iter().collect::<Vec<_>>(), vec!["5"]);
        assert_eq!(buckets.separators.iter().collect::<Vec<_>>(), vec![";"]);
        assert_eq!(buckets.others.iter().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(buckets.total_distinct(), 6);
    }

    #[test]
    fn lexeme_lands_in_exactly_one_bucket() {
        let mut buckets = CategoryBuckets::new();
        let lexemes = ["for", "++", "!", ",", "{", "#", "\"s\"", "'c'", "42", "?"];
        for lexeme in lexemes {
            buckets.record(lexeme);
        }

        for lexeme in lexemes {
            let holders = TokenCategory::ALL
                .iter()
                .filter(|&&c| buckets.bucket(c).contains(lexeme))
                .count();
            assert_eq!(holders, 1, "{lexeme} should be in one bucket");
        }
    }

    #[test]
    fn quoted_literals_keep_shared_order() {
        let mut buckets = CategoryBuckets::new();
        for lexeme in ["'x'", "\"hi\"", "'x'", "'y'", "\"yo\""] {
            buckets.record(lexeme);
        }

        assert_eq!(
            buckets.quoted_literals.iter().collect::<Vec<_>>(),
            vec!["'x'", "\"hi\"", "'y'", "\"yo\""]
        );
        assert_eq!(buckets.string_literals.len(), 2);
        assert_eq!(buckets.char_literals.len(), 2);
        assert_eq!(buckets.total_distinct(), 4);
    }

    #[test]
    fn empty_by_default() {
        assert!(CategoryBuckets::new().is_empty());
    }
}
