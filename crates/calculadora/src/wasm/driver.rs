//! WASM Driver - runs the shared scenarios against the browser view
//!
//! Events go through a [`MockDom`] first, then to the component, and the
//! driver reads every answer back out of the re-rendered DOM.

use super::calculator::{EventOutcome, WasmCalculator};
use super::dom::{DomEvent, MockDom};
use super::view::{
    button_id, CLEAR_BUTTON_ID, FIRST_INPUT_ID, HISTORY_EXPRESSION_CLASS, HISTORY_ID,
    HISTORY_RESULT_CLASS, HISTORY_ROW_CLASS, OUTPUT_ID, SECOND_INPUT_ID,
};
use crate::core::Operator;
use crate::driver::{CalculatorDriver, HistoryItem};

/// WASM Driver wrapping calculator and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    /// The calculator instance
    calculator: WasmCalculator,
    /// Mock DOM for testing
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver with a freshly mounted component
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(WasmCalculator::new())
    }

    /// Creates a driver mounting an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: WasmCalculator) -> Self {
        let mut dom = MockDom::new();
        dom.mount(calculator.render());
        Self { calculator, dom }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Simulates typing a full value into a field
    pub fn type_input(&mut self, element_id: &str, text: &str) {
        self.dispatch(DomEvent::input(element_id, text));
    }

    /// Simulates clicking an element
    pub fn click(&mut self, element_id: &str) {
        self.dispatch(DomEvent::click(element_id));
    }

    fn dispatch(&mut self, event: DomEvent) {
        self.dom.dispatch_event(event.clone());
        match self.calculator.handle_event(&event) {
            EventOutcome::InputChanged | EventOutcome::Ignored => {}
            EventOutcome::Recomputed => self.sync_panels(),
            EventOutcome::Cleared => {
                self.sync_panels();
                self.sync_fields();
            }
        }
    }

    fn sync_panels(&mut self) {
        self.dom.replace_element(self.calculator.render_output());
        self.dom.replace_element(self.calculator.render_history());
    }

    fn sync_fields(&mut self) {
        let state = self.calculator.state();
        for (id, value) in [
            (FIRST_INPUT_ID, state.num1_input()),
            (SECOND_INPUT_ID, state.num2_input()),
        ] {
            if let Some(field) = self.dom.get_element_mut(id) {
                field.set_attr("value", value);
            }
        }
    }

    fn field_value(&self, id: &str) -> String {
        self.dom.get_value(id).unwrap_or_default().to_string()
    }
}

impl CalculatorDriver for WasmDriver {
    fn set_first_operand(&mut self, text: &str) {
        self.type_input(FIRST_INPUT_ID, text);
    }

    fn set_second_operand(&mut self, text: &str) {
        self.type_input(SECOND_INPUT_ID, text);
    }

    fn press_operator(&mut self, operator: Operator) {
        self.click(button_id(operator));
    }

    fn press_clear(&mut self) {
        self.click(CLEAR_BUTTON_ID);
    }

    fn output_text(&self) -> String {
        self.dom.get_element_text(OUTPUT_ID).unwrap_or_default()
    }

    fn inputs(&self) -> (String, String) {
        (
            self.field_value(FIRST_INPUT_ID),
            self.field_value(SECOND_INPUT_ID),
        )
    }

    fn history(&self) -> Vec<HistoryItem> {
        let Some(panel) = self.dom.get_element(HISTORY_ID) else {
            return Vec::new();
        };
        panel
            .find_by_class(HISTORY_ROW_CLASS)
            .into_iter()
            .map(|row| {
                let part = |class: &str| {
                    row.find_by_class(class)
                        .first()
                        .map(|e| e.text())
                        .unwrap_or_default()
                };
                let result = part(HISTORY_RESULT_CLASS);
                HistoryItem {
                    expression: part(HISTORY_EXPRESSION_CLASS),
                    result: result.strip_prefix("= ").unwrap_or(&result).to_string(),
                }
            })
            .collect()
    }
}
