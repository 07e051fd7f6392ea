//! Browser-side calculator component
//!
//! Owns the [`CalculatorState`] and maps DOM events onto its transitions.
//! Rendering is delegated to [`super::view`].

use tracing::trace;

use super::dom::{DomElement, DomEvent};
use super::view::{self, CLEAR_BUTTON_ID, FIRST_INPUT_ID, SECOND_INPUT_ID};
use crate::core::CalculatorState;

/// What an event changed, so callers only re-render what they must
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// An operand field changed; nothing else needs redrawing
    InputChanged,
    /// Output, history and possibly the fields changed
    Recomputed,
    /// The inputs were emptied and the output reset
    Cleared,
    /// The event had no handler
    Ignored,
}

/// Calculator component for the browser view
#[derive(Debug, Default)]
pub struct WasmCalculator {
    state: CalculatorState,
}

impl WasmCalculator {
    /// Creates a calculator in its mount-time state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Applies a DOM event to the state
    pub fn handle_event(&mut self, event: &DomEvent) -> EventOutcome {
        match event {
            DomEvent::Input { element_id, value } if element_id == FIRST_INPUT_ID => {
                self.state.set_first_operand(value);
                EventOutcome::InputChanged
            }
            DomEvent::Input { element_id, value } if element_id == SECOND_INPUT_ID => {
                self.state.set_second_operand(value);
                EventOutcome::InputChanged
            }
            DomEvent::Click { element_id } if element_id == CLEAR_BUTTON_ID => {
                self.state = std::mem::take(&mut self.state).clear();
                EventOutcome::Cleared
            }
            DomEvent::Click { element_id } => match view::operator_for_button(element_id) {
                Some(operator) => {
                    self.state = std::mem::take(&mut self.state).compute(operator);
                    EventOutcome::Recomputed
                }
                None => {
                    trace!(%element_id, "click without handler");
                    EventOutcome::Ignored
                }
            },
            DomEvent::Input { element_id, .. } => {
                trace!(%element_id, "input without handler");
                EventOutcome::Ignored
            }
        }
    }

    /// Renders the full component
    #[must_use]
    pub fn render(&self) -> DomElement {
        view::render_app(&self.state)
    }

    /// Renders only the output panel
    #[must_use]
    pub fn render_output(&self) -> DomElement {
        view::render_output(self.state.display())
    }

    /// Renders only the history panel
    #[must_use]
    pub fn render_history(&self) -> DomElement {
        view::render_operation_history(self.state.history().as_slice())
    }

    /// History as a JSON array, newest first
    #[must_use]
    pub fn history_json(&self) -> String {
        self.state
            .history()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }
}
