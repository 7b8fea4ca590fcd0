//! Flat symbol table of recognized declarations

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::log_debug;
use crate::logging::codes;

/// Rendered in place of a missing initializer
pub const NO_INITIALIZER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Variable,
    Function,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Variable => "variable",
            SymbolKind::Function => "function",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One declared name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub name: String,
    /// Space-joined data-type keywords, e.g. `unsigned long`
    pub declared_type: String,
    pub initializer: Option<String>,
    pub declared_at_line: u32,
    pub kind: SymbolKind,
}

impl SymbolRecord {
    pub fn variable(
        name: &str,
        declared_type: &str,
        initializer: Option<&str>,
        declared_at_line: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
            initializer: initializer.map(str::to_string),
            declared_at_line,
            kind: SymbolKind::Variable,
        }
    }

    pub fn function(name: &str, declared_type: &str, declared_at_line: u32) -> Self {
        Self {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
            initializer: None,
            declared_at_line,
            kind: SymbolKind::Function,
        }
    }

    /// Initializer text, or the placeholder when there is none
    pub fn value(&self) -> &str {
        self.initializer.as_deref().unwrap_or(NO_INITIALIZER)
    }
}

/// Symbol table keyed by name; the first declaration of a name wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    records: IndexMap<String, SymbolRecord>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless the name is already declared.
    /// Returns true when the record was added.
    pub fn insert(&mut self, record: SymbolRecord) -> bool {
        if let Some(first_line) = self.check_duplicate(&record.name) {
            log_debug!("Redeclaration ignored",
                "code" => codes::symbols::DUPLICATE_DECLARATION.as_str(),
                "name" => record.name.as_str(),
                "first_line" => first_line,
                "line" => record.declared_at_line
            );
            return false;
        }

        self.records.insert(record.name.clone(), record);
        true
    }

    pub fn has_symbol(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&SymbolRecord> {
        self.records.get(name)
    }

    /// Line of the existing declaration, if the name is taken
    pub fn check_duplicate(&self, name: &str) -> Option<u32> {
        self.records.get(name).map(|record| record.declared_at_line)
    }

    /// Records in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &SymbolRecord> + '_ {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count_of(&self, kind: SymbolKind) -> usize {
        self.iter().filter(|record| record.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declaration_wins() {
        let mut table = SymbolTable::new();
        assert!(table.insert(SymbolRecord::variable("abcd12@r", "int", Some("5"), 3)));
        assert!(!table.insert(SymbolRecord::variable("abcd12@r", "float", None, 9)));

        assert_eq!(table.len(), 1);
        let record = table.get("abcd12@r").unwrap();
        assert_eq!(record.declared_type, "int");
        assert_eq!(record.value(), "5");
        assert_eq!(record.declared_at_line, 3);
        assert_eq!(table.check_duplicate("abcd12@r"), Some(3));
        assert!(table.has_symbol("abcd12@r"));
        assert!(!table.has_symbol("efgh12@r"));
    }

    #[test]
    fn preserves_declaration_order() {
        let mut table = SymbolTable::new();
        table.insert(SymbolRecord::variable("zzab12@r", "int", None, 1));
        table.insert(SymbolRecord::function("abcd12@r", "void", 2));
        table.insert(SymbolRecord::variable("mmno12@r", "char", Some("'c'"), 3));

        let names: Vec<_> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zzab12@r", "abcd12@r", "mmno12@r"]);
        assert_eq!(table.count_of(SymbolKind::Function), 1);
        assert_eq!(table.count_of(SymbolKind::Variable), 2);
    }

    #[test]
    fn missing_initializer_renders_placeholder() {
        let function = SymbolRecord::function("tokyo23@r", "void", 4);
        assert_eq!(function.value(), NO_INITIALIZER);
        assert_eq!(function.initializer, None);

        let dash = SymbolRecord::variable("tokyo23@r", "int", Some("-"), 4);
        assert_eq!(dash.value(), "-");
        assert_eq!(dash.initializer.as_deref(), Some("-"));
    }
}
