//! Interactive confirmation gate

use std::io::{self, BufRead, Write};

use colored::Colorize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationDecision {
    Confirmed,
    Declined,
    AutoApproved,
}

impl ConfirmationDecision {
    /// Whether the guarded action may go ahead.
    pub fn approved(self) -> bool {
        !matches!(self, ConfirmationDecision::Declined)
    }

    /// Interpret one line of user input. Only `y` and `yes` approve.
    pub fn from_answer(answer: &str) -> Self {
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
            ConfirmationDecision::Confirmed
        } else {
            ConfirmationDecision::Declined
        }
    }
}

pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> ConfirmationDecision;
}

/// Asks on `output` and reads a single line from `input`.
pub struct Prompt<R, W> {
    auto_confirm: bool,
    input: R,
    output: W,
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(auto_confirm: bool) -> Self {
        Self::new(auto_confirm, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(auto_confirm: bool, input: R, output: W) -> Self {
        Self {
            auto_confirm,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, prompt: &str) -> ConfirmationDecision {
        if self.auto_confirm {
            return ConfirmationDecision::AutoApproved;
        }

        let question = format!("{} (y/N): ", prompt);
        if write!(self.output, "{}", question.yellow())
            .and_then(|()| self.output.flush())
            .is_err()
        {
            return ConfirmationDecision::Declined;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => ConfirmationDecision::from_answer(&answer),
            Err(e) => {
                tracing::warn!("could not read confirmation: {}", e);
                ConfirmationDecision::Declined
            }
        }
    }
}
