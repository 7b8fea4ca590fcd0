//! Interactive identifier validation prompt
//!
//! The session is generic over its input and output so it can be driven by
//! a terminal or by an in-memory buffer.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::identifier::{explain, Verdict};
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};

const BANNER_RULE: &str = "========================================";
const BANNER_TITLE: &str = "Variable Declaration Validity Check  ";
const OUTER_PROMPT: &str = "Do you want to check a variable name? (Y/N): ";
const INNER_PROMPT: &str = "Enter variable/identifier name to validate (or N to exit): ";
const EXIT_MESSAGE: &str = "Exiting validation mode.";
const INVALID_CHOICE: &str = "Invalid choice, please type Y or N.";

#[derive(Debug, thiserror::Error)]
pub enum InteractiveError {
    #[error("Failed to read interactive input: {0}")]
    InputRead(#[source] io::Error),

    #[error("Failed to write interactive output: {0}")]
    OutputWrite(#[source] io::Error),
}

impl InteractiveError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            InteractiveError::InputRead(_) => codes::interactive::INPUT_READ_FAILED,
            InteractiveError::OutputWrite(_) => codes::interactive::OUTPUT_WRITE_FAILED,
        }
    }
}

/// Counts for one finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub checked: usize,
    pub valid: usize,
}

enum Flow {
    Continue,
    Exit,
}

struct Session<R, W> {
    input: R,
    output: W,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn say(&mut self, text: &str) -> Result<(), InteractiveError> {
        writeln!(self.output, "{text}").map_err(InteractiveError::OutputWrite)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, InteractiveError> {
        write!(self.output, "\n{text}")
            .and_then(|_| self.output.flush())
            .map_err(InteractiveError::OutputWrite)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(InteractiveError::InputRead)?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn outer_loop(&mut self) -> Result<(), InteractiveError> {
        self.say("")?;
        self.say(BANNER_RULE)?;
        self.say(BANNER_TITLE)?;
        self.say(BANNER_RULE)?;

        while let Some(answer) = self.prompt(OUTER_PROMPT)? {
            match answer.chars().next() {
                Some('N' | 'n') => {
                    self.say(EXIT_MESSAGE)?;
                    return Ok(());
                }
                Some('Y' | 'y') => {
                    if let Flow::Exit = self.inner_loop()? {
                        return Ok(());
                    }
                }
                _ => self.say(INVALID_CHOICE)?,
            }
        }
        Ok(())
    }

    fn inner_loop(&mut self) -> Result<Flow, InteractiveError> {
        while let Some(candidate) = self.prompt(INNER_PROMPT)? {
            if matches!(candidate.trim(), "N" | "n") {
                self.say(EXIT_MESSAGE)?;
                return Ok(Flow::Exit);
            }
            self.check(&candidate)?;
        }
        Ok(Flow::Exit)
    }

    fn check(&mut self, candidate: &str) -> Result<(), InteractiveError> {
        self.say(&format!("\nChecking variable: \"{candidate}\""))?;

        let verdict = explain(candidate);
        self.summary.checked += 1;

        match &verdict {
            Verdict::Valid(_) => {
                self.summary.valid += 1;
                self.say("Valid identifier!")?;
                self.say("Reason: ")?;
            }
            Verdict::Invalid(_) => {
                self.say("Invalid identifier!")?;
                self.say("Reason:")?;
            }
        }
        for reason in verdict.reasons() {
            self.say(&format!("  - {reason}"))?;
        }

        log_debug!("Interactive check",
            "candidate" => candidate,
            "valid" => verdict.is_valid());
        Ok(())
    }
}

/// Run the validation prompt until the user exits or input ends
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
) -> Result<SessionSummary, InteractiveError> {
    let mut session = Session {
        input,
        output,
        summary: SessionSummary::default(),
    };

    if let Err(error) = session.outer_loop() {
        log_error!(error.error_code(), "Interactive session aborted",
            "error" => &error,
            "checked" => session.summary.checked);
        return Err(error);
    }

    log_success!(codes::success::INTERACTIVE_SESSION_COMPLETE, "Interactive session finished",
        "checked" => session.summary.checked,
        "valid" => session.summary.valid);
    Ok(session.summary)
}

/// Initialize interactive module logging validation (for system startup)
pub fn init_interactive_logging() -> Result<(), String> {
    let test_codes = [
        codes::interactive::INPUT_READ_FAILED,
        codes::interactive::OUTPUT_WRITE_FAILED,
    ];

    for code in &test_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Interactive error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}
