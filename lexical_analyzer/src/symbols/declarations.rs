//! Declaration recognizer
//!
//! A single greedy pattern over one line's lexemes: a leading run of
//! data-type keywords, then either a function name followed by `(` or a
//! comma-separated list of variable names with optional `= value`. There is
//! no backtracking and nothing spans lines.

use serde::Serialize;

use super::identifiers::IdentifierSets;
use super::table::{SymbolRecord, SymbolTable};
use crate::grammar::is_data_type_keyword;
use crate::identifier;
use crate::lexical::classify::is_plausible_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Function,
    Variables,
}

/// Shape of a declaration line before any name is judged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationHead {
    pub kind: DeclarationKind,
    /// Space-joined data-type keywords in source order
    pub declared_type: String,
    /// Index of the first token after the data-type run
    pub name_index: usize,
}

/// What happened to one candidate name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameOutcome {
    Valid {
        name: String,
        initializer: Option<String>,
        inserted: bool,
    },
    Invalid {
        name: String,
    },
    /// Failed the grammar but does not look like a name attempt
    Ignored {
        lexeme: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDeclarations {
    pub head: DeclarationHead,
    pub names: Vec<NameOutcome>,
}

impl LineDeclarations {
    pub fn valid_count(&self) -> usize {
        self.names
            .iter()
            .filter(|outcome| matches!(outcome, NameOutcome::Valid { .. }))
            .count()
    }

    pub fn invalid_count(&self) -> usize {
        self.names
            .iter()
            .filter(|outcome| matches!(outcome, NameOutcome::Invalid { .. }))
            .count()
    }
}

/// Classify a line's shape. Lines with no leading data type, or made only
/// of data types, are not declarations.
pub fn recognize(tokens: &[&str]) -> Option<DeclarationHead> {
    let type_len = tokens
        .iter()
        .take_while(|token| is_data_type_keyword(token))
        .count();

    if type_len == 0 || type_len >= tokens.len() {
        return None;
    }

    let kind = if tokens.get(type_len + 1) == Some(&"(") {
        DeclarationKind::Function
    } else {
        DeclarationKind::Variables
    };

    Some(DeclarationHead {
        kind,
        declared_type: tokens[..type_len].join(" "),
        name_index: type_len,
    })
}

/// Recognizes declarations and records their names
pub struct DeclarationRecognizer<'s> {
    identifiers: &'s mut IdentifierSets,
    symbols: &'s mut SymbolTable,
}

impl<'s> DeclarationRecognizer<'s> {
    pub fn new(identifiers: &'s mut IdentifierSets, symbols: &'s mut SymbolTable) -> Self {
        Self {
            identifiers,
            symbols,
        }
    }

    /// Process one line. Returns `None` for lines that are not declarations.
    pub fn process_line(&mut self, tokens: &[&str], line: u32) -> Option<LineDeclarations> {
        let head = recognize(tokens)?;

        let names = match head.kind {
            DeclarationKind::Function => {
                vec![self.record_function(tokens[head.name_index], &head.declared_type, line)]
            }
            DeclarationKind::Variables => {
                self.record_variables(&tokens[head.name_index..], &head.declared_type, line)
            }
        };

        Some(LineDeclarations { head, names })
    }

    /// Function names that fail the grammar are always reported, even
    /// when the "name" is punctuation.
    fn record_function(&mut self, name: &str, declared_type: &str, line: u32) -> NameOutcome {
        if identifier::is_valid(name) {
            self.identifiers.record_valid(name);
            let inserted = self
                .symbols
                .insert(SymbolRecord::function(name, declared_type, line));
            NameOutcome::Valid {
                name: name.to_string(),
                initializer: None,
                inserted,
            }
        } else {
            self.identifiers.record_invalid(name);
            NameOutcome::Invalid {
                name: name.to_string(),
            }
        }
    }

    fn record_variables(
        &mut self,
        tokens: &[&str],
        declared_type: &str,
        line: u32,
    ) -> Vec<NameOutcome> {
        let mut outcomes = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i];
            if token == "," {
                i += 1;
                continue;
            }
            if token == ";" {
                break;
            }

            if identifier::is_valid(token) {
                self.identifiers.record_valid(token);
                i += 1;

                let mut initializer = None;
                if tokens.get(i) == Some(&"=") {
                    i += 1;
                    if let Some(value) = tokens.get(i) {
                        initializer = Some(*value);
                        i += 1;
                    }
                }

                let inserted = self.symbols.insert(SymbolRecord::variable(
                    token,
                    declared_type,
                    initializer,
                    line,
                ));
                outcomes.push(NameOutcome::Valid {
                    name: token.to_string(),
                    initializer: initializer.map(str::to_string),
                    inserted,
                });
            } else {
                if is_plausible_name(token) {
                    self.identifiers.record_invalid(token);
                    outcomes.push(NameOutcome::Invalid {
                        name: token.to_string(),
                    });
                } else {
                    outcomes.push(NameOutcome::Ignored {
                        lexeme: token.to_string(),
                    });
                }
                i += 1;
            }
        }

        outcomes
    }
}
