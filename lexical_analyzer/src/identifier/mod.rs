//! Identifier grammar validation
//!
//! A standalone automaton that judges declared names, plus the structural
//! breakdown the interactive validator prints.

pub mod diagnostics;
pub mod validator;

pub use diagnostics::{explain, satisfied_rules, Verdict};
pub use validator::{is_valid, validate, IdentifierBreakdown, PhaseScan, RuleViolation};

/// Initialize identifier validation logging (for system startup)
pub fn init_identifier_logging() -> Result<(), String> {
    let code = crate::logging::codes::identifiers::INVALID_IDENTIFIER;

    if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
        return Err(format!(
            "Identifier error code {} not found in metadata registry",
            code.as_str()
        ));
    }

    crate::log_debug!("Identifier grammar loaded",
        "length_bounds" => format!("{}-{}", validator::LENGTH.start(), validator::LENGTH.end()),
        "suffix" => validator::SUFFIX
    );

    Ok(())
}
