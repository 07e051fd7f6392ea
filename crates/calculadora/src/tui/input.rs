//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Operator;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a character to the focused field
    InsertChar(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Focus the other field, forwards
    NextField,
    /// Focus the other field, backwards
    PreviousField,
    /// Compute with an operator
    Operator(Operator),
    /// Clear both fields and the output
    Clear,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    ///
    /// `focused_text` is the current content of the focused field. `+` and
    /// `-` type a sign when the field is empty or ends in an exponent
    /// marker, and trigger the operator otherwise.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent, focused_text: &str) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ ('+' | '-')) if Self::expects_sign(focused_text) => {
                KeyAction::InsertChar(c)
            }
            KeyCode::Char(c) => match Self::operator_for(c) {
                Some(op) => KeyAction::Operator(op),
                None => KeyAction::InsertChar(c),
            },
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Tab | KeyCode::Enter => KeyAction::NextField,
            KeyCode::BackTab => KeyAction::PreviousField,
            KeyCode::Esc => KeyAction::Clear,
            _ => KeyAction::None,
        }
    }

    /// Operator bound to a character key
    #[must_use]
    pub fn operator_for(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    fn expects_sign(text: &str) -> bool {
        text.is_empty() || text.ends_with(|c| c == 'e' || c == 'E')
    }
}
