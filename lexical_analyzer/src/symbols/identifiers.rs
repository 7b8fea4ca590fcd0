//! Valid and invalid declared-name sets

use serde::{Deserialize, Serialize};

use crate::utils::OrderedSet;

/// Declared names partitioned by the identifier grammar verdict.
/// A name is never moved between sets or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierSets {
    pub valid: OrderedSet,
    pub invalid: OrderedSet,
}

impl IdentifierSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_valid(&mut self, name: &str) -> bool {
        self.valid.insert(name)
    }

    pub fn record_invalid(&mut self, name: &str) -> bool {
        self.invalid.insert(name)
    }

    pub fn has_invalid(&self) -> bool {
        !self.invalid.is_empty()
    }
}
