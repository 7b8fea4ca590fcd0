//! Identifier grammar automaton
//!
//! Accepted shape, in this order and nothing else:
//!
//! 1. an optional prefix, one of `#`, `@`, `!`
//! 2. 4 to 7 lowercase ASCII letters, never three identical in a row
//! 3. 2 to 4 ASCII digits, never three identical in a row
//! 4. the literal suffix `@r`
//!
//! Each phase consumes the longest run of its character class before the
//! next phase starts. There is no backtracking, so `abcdefgh12@r` fails on
//! its eight letters even though a shorter split exists.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const PREFIX_CHARS: [char; 3] = ['#', '@', '!'];
pub const LETTER_COUNT: RangeInclusive<usize> = 4..=7;
pub const DIGIT_COUNT: RangeInclusive<usize> = 2..=4;
pub const MAX_RUN: usize = 2;
pub const SUFFIX: &str = "@r";

/// Implied by the phase bounds: 4 + 2 + 2 up to 1 + 7 + 4 + 2
pub const LENGTH: RangeInclusive<usize> = 8..=14;

/// Result of greedily consuming one character class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseScan {
    pub count: usize,
    /// Longest run of one repeated character inside the phase
    pub longest_run: usize,
}

impl PhaseScan {
    pub fn runs_ok(&self) -> bool {
        self.longest_run <= MAX_RUN
    }
}

/// Structural breakdown of a candidate name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierBreakdown {
    pub prefix: Option<char>,
    /// Whether the first character is a lowercase letter (only meaningful
    /// without a prefix)
    pub starts_lowercase: bool,
    pub letters: PhaseScan,
    pub digits: PhaseScan,
    pub has_suffix: bool,
    /// Characters left after the suffix
    pub trailing: usize,
}

/// A grammar rule the candidate breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleViolation {
    #[error("Lowercase letters count not in 4 to 7 (found {found})")]
    LetterCount { found: usize },

    #[error("More than two consecutive same letters found")]
    LetterRun,

    #[error("Digits count not in 2 to 4 (found {found})")]
    DigitCount { found: usize },

    #[error("More than two consecutive same digits found")]
    DigitRun,

    #[error("Does not end with \"@r\"")]
    MissingSuffix,

    #[error("Unexpected characters after \"@r\" (found {count})")]
    TrailingCharacters { count: usize },

    #[error("Must start with optional '#', '@', '!' followed by lowercase letters")]
    InvalidStart,
}

fn scan_phase<I>(chars: &mut std::iter::Peekable<I>, class: fn(&char) -> bool) -> PhaseScan
where
    I: Iterator<Item = char>,
{
    let mut scan = PhaseScan::default();
    let mut previous = None;
    let mut run = 0;

    while let Some(ch) = chars.next_if(class) {
        scan.count += 1;
        run = if previous == Some(ch) { run + 1 } else { 1 };
        previous = Some(ch);
        scan.longest_run = scan.longest_run.max(run);
    }

    scan
}

impl IdentifierBreakdown {
    /// Run the automaton over a candidate
    pub fn scan(candidate: &str) -> Self {
        let mut chars = candidate.chars().peekable();

        let prefix = chars.next_if(|c| PREFIX_CHARS.contains(c));
        let starts_lowercase = candidate.starts_with(|c: char| c.is_ascii_lowercase());
        let letters = scan_phase(&mut chars, char::is_ascii_lowercase);
        let digits = scan_phase(&mut chars, char::is_ascii_digit);

        let rest: String = chars.collect();
        let has_suffix = rest.starts_with(SUFFIX);
        let trailing = if has_suffix {
            rest[SUFFIX.len()..].chars().count()
        } else {
            0
        };

        Self {
            prefix,
            starts_lowercase,
            letters,
            digits,
            has_suffix,
            trailing,
        }
    }

    /// Every rule the scanned candidate breaks, in reporting order
    pub fn violations(&self) -> Vec<RuleViolation> {
        let mut violations = Vec::new();

        if !LETTER_COUNT.contains(&self.letters.count) {
            violations.push(RuleViolation::LetterCount {
                found: self.letters.count,
            });
        }
        if !self.letters.runs_ok() {
            violations.push(RuleViolation::LetterRun);
        }
        if !DIGIT_COUNT.contains(&self.digits.count) {
            violations.push(RuleViolation::DigitCount {
                found: self.digits.count,
            });
        }
        if !self.digits.runs_ok() {
            violations.push(RuleViolation::DigitRun);
        }
        if !self.has_suffix {
            violations.push(RuleViolation::MissingSuffix);
        } else if self.trailing > 0 {
            violations.push(RuleViolation::TrailingCharacters {
                count: self.trailing,
            });
        }
        if self.prefix.is_none() && !self.starts_lowercase {
            violations.push(RuleViolation::InvalidStart);
        }

        violations
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

/// Whether a candidate matches the identifier grammar
pub fn is_valid(candidate: &str) -> bool {
    LENGTH.contains(&candidate.len()) && IdentifierBreakdown::scan(candidate).is_valid()
}

/// Full breakdown of a candidate
pub fn validate(candidate: &str) -> IdentifierBreakdown {
    IdentifierBreakdown::scan(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_and_maximal_shapes() {
        assert!(is_valid("abcd12@r"));
        assert!(is_valid("#abcdefg1234@r"));
        assert!(is_valid("@tour23@r"));
        assert!(is_valid("!aabcd12@r"));
        assert!(is_valid("tokyo23@r"));
    }

    #[test]
    fn rejects_letter_count_out_of_range() {
        assert!(!is_valid("abc12@r"));
        assert!(!is_valid("abcdefgh12@r"));
        assert_eq!(
            validate("abcdefgh12@r").violations(),
            vec![RuleViolation::LetterCount { found: 8 }]
        );
    }

    #[test]
    fn rejects_runs_of_three() {
        assert!(!is_valid("aaab12@r"));
        assert!(is_valid("aabb12@r"));
        assert!(!is_valid("abcd111@r"));
        assert!(is_valid("abcd1121@r"));

        assert_eq!(validate("aaab12@r").violations(), vec![RuleViolation::LetterRun]);
        assert_eq!(validate("abcd111@r").violations(), vec![RuleViolation::DigitRun]);
    }

    #[test]
    fn rejects_digit_count_out_of_range() {
        assert!(!is_valid("abcd1@r"));
        assert!(!is_valid("abcd12345@r"));
        assert_eq!(
            validate("abcd12345@r").violations(),
            vec![RuleViolation::DigitCount { found: 5 }]
        );
    }

    #[test]
    fn suffix_must_close_the_string() {
        assert_eq!(
            validate("abcd12").violations(),
            vec![RuleViolation::MissingSuffix]
        );
        assert_eq!(
            validate("abcd12@rx").violations(),
            vec![RuleViolation::TrailingCharacters { count: 1 }]
        );
        assert!(!is_valid("abcd12@r@r"));
        assert!(!is_valid("abcd12@R"));
    }

    #[test]
    fn no_interleaving_between_phases() {
        assert!(!is_valid("ab12cd@r"));
        assert!(!is_valid("abcd12ef@r"));
        assert!(!is_valid("Abcd12@r"));
        assert!(!is_valid("##abcd12@r"));
    }

    #[test]
    fn bad_start_is_reported() {
        let violations = validate("Xabcd12@r").violations();
        assert!(violations.contains(&RuleViolation::InvalidStart));
        assert!(violations.contains(&RuleViolation::LetterCount { found: 0 }));

        assert!(!validate("@abcd12").violations().contains(&RuleViolation::InvalidStart));
    }

    #[test]
    fn empty_candidate_breaks_several_rules() {
        assert_eq!(
            validate("").violations(),
            vec![
                RuleViolation::LetterCount { found: 0 },
                RuleViolation::DigitCount { found: 0 },
                RuleViolation::MissingSuffix,
                RuleViolation::InvalidStart,
            ]
        );
    }

    #[test]
    fn breakdown_of_valid_name() {
        let breakdown = validate("@aabcd12@r");
        assert_eq!(breakdown.prefix, Some('@'));
        assert_eq!(breakdown.letters, PhaseScan { count: 5, longest_run: 2 });
        assert_eq!(breakdown.digits, PhaseScan { count: 2, longest_run: 1 });
        assert!(breakdown.has_suffix);
        assert_eq!(breakdown.trailing, 0);
        assert!(breakdown.is_valid());
    }

    #[test]
    fn length_precheck_agrees_with_structure() {
        for candidate in ["abcd12@r", "#abcdefg1234@r", "abcdefg12345@r", "abc1@r", "a"] {
            assert_eq!(
                LENGTH.contains(&candidate.len()) && validate(candidate).is_valid(),
                validate(candidate).is_valid(),
                "{candidate}"
            );
        }
    }

    #[test]
    fn violation_messages() {
        assert_eq!(
            RuleViolation::LetterCount { found: 3 }.to_string(),
            "Lowercase letters count not in 4 to 7 (found 3)"
        );
        assert_eq!(
            RuleViolation::MissingSuffix.to_string(),
            "Does not end with \"@r\""
        );
    }
}
