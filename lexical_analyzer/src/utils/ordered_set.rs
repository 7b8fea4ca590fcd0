//! Insertion-ordered, deduplicated string collection

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Set of strings that remembers first-seen order.
///
/// Inserting a value that is already present is a no-op; the original
/// position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedSet {
    items: IndexSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning true when it was not already present
    pub fn insert(&mut self, value: &str) -> bool {
        if self.items.contains(value) {
            return false;
        }
        self.items.insert(value.to_string())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.items.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(String::as_str)
    }

    /// Position of a value in first-seen order
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.items.get_index_of(value)
    }
}

impl<'a> Extend<&'a str> for OrderedSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> FromIterator<&'a str> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let mut set = OrderedSet::new();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert!(set.insert("c"));

        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(set.index_of("a"), Some(1));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn serializes_as_plain_list() {
        let set: OrderedSet = ["int", "x", "int"].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["int","x"]"#);
    }
}
