//! Calculator state and its transitions
//!
//! `compute` and `clear` consume the current state and return the next one.
//! Operand edits are plain field updates.

use tracing::debug;

use crate::core::history::{now_millis, History, HistoryEntry};
use crate::core::numeric::{format_result, parse_number};
use crate::core::{CalcError, CalcResult, Operator};
use crate::labels::{IDLE_PROMPT, RESULT_PREFIX};

/// What the output panel shows. Result and error are exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing computed since mount or the last clear
    #[default]
    Idle,
    /// Last computation failed
    Error(CalcError),
    /// Last computation succeeded, holding the formatted result
    Success(String),
}

impl DisplayState {
    /// Text of the output panel
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Idle => IDLE_PROMPT.to_string(),
            Self::Error(err) => err.to_string(),
            Self::Success(result) => format!("{RESULT_PREFIX}{result}"),
        }
    }
}

/// Complete state owned by the calculator component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    num1_input: String,
    num2_input: String,
    display: DisplayState,
    history: History,
}

impl CalculatorState {
    /// Creates the mount-time state: empty inputs, idle display, no history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of the first operand field
    #[must_use]
    pub fn num1_input(&self) -> &str {
        &self.num1_input
    }

    /// Raw text of the second operand field
    #[must_use]
    pub fn num2_input(&self) -> &str {
        &self.num2_input
    }

    /// Current output panel state
    #[must_use]
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Last formatted result, if the last computation succeeded
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        match &self.display {
            DisplayState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Last error, if the last computation failed
    #[must_use]
    pub fn error(&self) -> Option<CalcError> {
        match self.display {
            DisplayState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Operation history, newest first
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Stores the first operand text verbatim
    pub fn set_first_operand(&mut self, text: &str) {
        text.clone_into(&mut self.num1_input);
    }

    /// Stores the second operand text verbatim
    pub fn set_second_operand(&mut self, text: &str) {
        text.clone_into(&mut self.num2_input);
    }

    /// Runs `operator` on the current inputs, reading the wall clock for the id
    #[must_use]
    pub fn compute(self, operator: Operator) -> Self {
        self.compute_at(operator, now_millis())
    }

    /// Runs `operator` on the current inputs with an explicit clock reading.
    ///
    /// On success the formatted result is displayed and a history entry is
    /// prepended. On failure the error is displayed and history is untouched.
    #[must_use]
    pub fn compute_at(mut self, operator: Operator, now_ms: u64) -> Self {
        match evaluate(&self.num1_input, &self.num2_input, operator) {
            Ok((num1, num2, value)) => {
                let result = format_result(value);
                let id = self.history.next_id(now_ms);
                debug!(id, %operator, num1, num2, %result, "computation succeeded");
                self.history
                    .push(HistoryEntry::new(id, num1, num2, operator, result.clone()));
                self.display = DisplayState::Success(result);
            }
            Err(err) => {
                debug!(%operator, error = %err, "computation failed");
                self.display = DisplayState::Error(err);
            }
        }
        self
    }

    /// Empties both inputs and returns the display to idle. History is kept.
    #[must_use]
    pub fn clear(mut self) -> Self {
        self.num1_input.clear();
        self.num2_input.clear();
        self.display = DisplayState::Idle;
        debug!(history_len = self.history.len(), "cleared");
        self
    }
}

fn evaluate(first: &str, second: &str, operator: Operator) -> CalcResult<(f64, f64, f64)> {
    let (Some(num1), Some(num2)) = (parse_number(first), parse_number(second)) else {
        return Err(CalcError::InvalidNumber);
    };
    let value = operator.apply(num1, num2)?;
    Ok((num1, num2, value))
}
