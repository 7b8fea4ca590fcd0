//! Human-readable rule explanations for a scanned candidate

use super::validator::{IdentifierBreakdown, RuleViolation};

/// Verdict on a candidate with one explanation line per rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid(Vec<String>),
    Invalid(Vec<RuleViolation>),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid(_))
    }

    /// Explanation lines without the leading bullet
    pub fn reasons(&self) -> Vec<String> {
        match self {
            Verdict::Valid(lines) => lines.clone(),
            Verdict::Invalid(violations) => violations.iter().map(ToString::to_string).collect(),
        }
    }
}

fn yes_no(ok: bool) -> &'static str {
    if ok {
        "Yes"
    } else {
        "No"
    }
}

/// Rule-by-rule confirmation for a name that passed
pub fn satisfied_rules(breakdown: &IdentifierBreakdown) -> Vec<String> {
    let prefix = match breakdown.prefix {
        Some(c) => format!("Present ({c})"),
        None => "Not present".to_string(),
    };

    vec![
        format!("Optional leading character (#, @, !): {prefix}"),
        format!(
            "Lowercase letters (a-z) count: {} (required 4-7)",
            breakdown.letters.count
        ),
        format!(
            "No more than two consecutive same letters: {}",
            yes_no(breakdown.letters.runs_ok())
        ),
        format!(
            "Digits (0-9) count: {} (required 2-4)",
            breakdown.digits.count
        ),
        format!(
            "No more than two consecutive same digits: {}",
            yes_no(breakdown.digits.runs_ok())
        ),
        format!("Ends with \"@r\": {}", yes_no(breakdown.has_suffix)),
    ]
}

/// Judge a candidate and explain the outcome
pub fn explain(candidate: &str) -> Verdict {
    let breakdown = IdentifierBreakdown::scan(candidate);
    let violations = breakdown.violations();

    if violations.is_empty() && super::is_valid(candidate) {
        Verdict::Valid(satisfied_rules(&breakdown))
    } else {
        Verdict::Invalid(violations)
    }
}
