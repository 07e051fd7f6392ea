//! TUI application state

use tracing::debug;

use super::input::KeyAction;
use crate::core::{CalculatorState, Operator};

/// Operand field that receives typed characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    /// First operand
    #[default]
    First,
    /// Second operand
    Second,
}

impl Field {
    /// The other field. With two fields, forwards and backwards coincide.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    state: CalculatorState,
    focus: Field,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with the first field focused
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the focused field
    #[must_use]
    pub fn focused(&self) -> Field {
        self.focus
    }

    /// Moves focus to `field`
    pub fn focus(&mut self, field: Field) {
        self.focus = field;
    }

    /// Text of a field
    #[must_use]
    pub fn field_text(&self, field: Field) -> &str {
        match field {
            Field::First => self.state.num1_input(),
            Field::Second => self.state.num2_input(),
        }
    }

    /// Text of the focused field
    #[must_use]
    pub fn focused_text(&self) -> &str {
        self.field_text(self.focus)
    }

    /// Replaces the text of a field
    pub fn set_field(&mut self, field: Field, text: &str) {
        match field {
            Field::First => self.state.set_first_operand(text),
            Field::Second => self.state.set_second_operand(text),
        }
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a key action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::InsertChar(c) => self.insert_char(c),
            KeyAction::Backspace => self.delete_char(),
            KeyAction::NextField | KeyAction::PreviousField => self.focus = self.focus.other(),
            KeyAction::Operator(op) => self.compute(op),
            KeyAction::Clear => self.clear(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Appends a character to the focused field
    pub fn insert_char(&mut self, c: char) {
        let mut text = self.focused_text().to_string();
        text.push(c);
        self.set_field(self.focus, &text);
    }

    /// Deletes the last character of the focused field
    pub fn delete_char(&mut self) {
        let mut text = self.focused_text().to_string();
        if text.pop().is_some() {
            self.set_field(self.focus, &text);
        }
    }

    /// Computes with the current operands
    pub fn compute(&mut self, operator: Operator) {
        self.state = std::mem::take(&mut self.state).compute(operator);
    }

    /// Clears both fields and the output; focus returns to the first field
    pub fn clear(&mut self) {
        self.state = std::mem::take(&mut self.state).clear();
        self.focus = Field::First;
        debug!("terminal fields cleared");
    }
}
