//! Declarations, the names they introduce, and the symbol table
//!
//! The declaration recognizer routes every candidate name through the
//! identifier grammar: valid names land in the valid set and the symbol
//! table, plausible failures in the invalid set.

pub mod declarations;
pub mod identifiers;
pub mod table;

pub use declarations::{
    recognize, DeclarationHead, DeclarationKind, DeclarationRecognizer, LineDeclarations,
    NameOutcome,
};
pub use identifiers::IdentifierSets;
pub use table::{SymbolKind, SymbolRecord, SymbolTable, NO_INITIALIZER};

/// Initialize symbol module logging validation (for system startup)
pub fn init_symbol_logging() -> Result<(), String> {
    let code = crate::logging::codes::symbols::DUPLICATE_DECLARATION;

    if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
        return Err(format!(
            "Symbol error code {} not found in metadata registry",
            code.as_str()
        ));
    }

    Ok(())
}
