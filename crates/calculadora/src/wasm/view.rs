//! Pure rendering of calculator state into DOM trees
//!
//! The calculator panel and the history panel are independent: the history
//! panel only ever sees a slice of entries.

use super::dom::DomElement;
use crate::core::{CalculatorState, DisplayState, HistoryEntry, Operator};
use crate::labels;

/// ID of the component root
pub const APP_ID: &str = "calculadora";
/// ID of the first operand field
pub const FIRST_INPUT_ID: &str = "num1-input";
/// ID of the second operand field
pub const SECOND_INPUT_ID: &str = "num2-input";
/// ID of the clear button
pub const CLEAR_BUTTON_ID: &str = "btn-clear";
/// ID of the output panel
pub const OUTPUT_ID: &str = "calc-output";
/// ID of the history panel
pub const HISTORY_ID: &str = "calc-history";

/// Class on each history row's expression span
pub const HISTORY_EXPRESSION_CLASS: &str = "history-expression";
/// Class on each history row's result span
pub const HISTORY_RESULT_CLASS: &str = "history-result";
/// Class on each history row
pub const HISTORY_ROW_CLASS: &str = "history-row";

/// Button ID for an operator
#[must_use]
pub const fn button_id(operator: Operator) -> &'static str {
    match operator {
        Operator::Add => "btn-add",
        Operator::Subtract => "btn-sub",
        Operator::Multiply => "btn-mul",
        Operator::Divide => "btn-div",
    }
}

/// Operator bound to a button ID, if any
#[must_use]
pub fn operator_for_button(id: &str) -> Option<Operator> {
    Operator::ALL.into_iter().find(|op| button_id(*op) == id)
}

/// Element ID of the history row for an entry id
#[must_use]
pub fn history_row_id(entry_id: u64) -> String {
    format!("history-{entry_id}")
}

/// Renders the whole component: calculator panel then history panel
#[must_use]
pub fn render_app(state: &CalculatorState) -> DomElement {
    DomElement::new("div")
        .with_id(APP_ID)
        .with_class("calculadora")
        .with_child(render_calculator(state))
        .with_child(render_operation_history(state.history().as_slice()))
}

/// Renders the title, operand fields, buttons and output panel
#[must_use]
pub fn render_calculator(state: &CalculatorState) -> DomElement {
    let operators = Operator::ALL.into_iter().map(|op| {
        DomElement::new("button")
            .with_id(button_id(op))
            .with_class("operator")
            .with_attr("type", "button")
            .with_text(op.symbol())
    });

    let buttons = DomElement::new("div")
        .with_class("buttons")
        .with_children(operators)
        .with_child(
            DomElement::new("button")
                .with_id(CLEAR_BUTTON_ID)
                .with_class("clear")
                .with_attr("type", "button")
                .with_text(labels::CLEAR),
        );

    DomElement::new("section")
        .with_class("calculator")
        .with_child(DomElement::new("h1").with_text(labels::TITLE))
        .with_child(operand_field(
            FIRST_INPUT_ID,
            labels::FIRST_LABEL,
            labels::FIRST_PLACEHOLDER,
            state.num1_input(),
        ))
        .with_child(operand_field(
            SECOND_INPUT_ID,
            labels::SECOND_LABEL,
            labels::SECOND_PLACEHOLDER,
            state.num2_input(),
        ))
        .with_child(buttons)
        .with_child(render_output(state.display()))
}

fn operand_field(id: &str, label: &str, placeholder: &str, value: &str) -> DomElement {
    DomElement::new("div")
        .with_class("field")
        .with_child(
            DomElement::new("label")
                .with_attr("for", id)
                .with_text(label),
        )
        .with_child(
            DomElement::new("input")
                .with_id(id)
                .with_attr("type", "text")
                .with_attr("placeholder", placeholder)
                .with_attr("value", value),
        )
}

/// Renders the output panel for a display state
#[must_use]
pub fn render_output(display: &DisplayState) -> DomElement {
    let modifier = match display {
        DisplayState::Idle => "idle",
        DisplayState::Error(_) => "error",
        DisplayState::Success(_) => "success",
    };
    DomElement::new("div")
        .with_id(OUTPUT_ID)
        .with_class("output")
        .with_class(modifier)
        .with_child(DomElement::new("p").with_text(&display.message()))
}

/// Renders the history panel. Rows keep the order of `entries`.
#[must_use]
pub fn render_operation_history(entries: &[HistoryEntry]) -> DomElement {
    let panel = DomElement::new("section")
        .with_id(HISTORY_ID)
        .with_class("history")
        .with_child(DomElement::new("h2").with_text(labels::HISTORY_TITLE));

    if entries.is_empty() {
        return panel.with_child(
            DomElement::new("p")
                .with_class("history-empty")
                .with_text(labels::EMPTY_HISTORY),
        );
    }

    let rows = entries.iter().map(|entry| {
        DomElement::new("li")
            .with_id(&history_row_id(entry.id()))
            .with_class(HISTORY_ROW_CLASS)
            .with_child(
                DomElement::new("span")
                    .with_class(HISTORY_EXPRESSION_CLASS)
                    .with_text(&entry.expression()),
            )
            .with_child(
                DomElement::new("span")
                    .with_class(HISTORY_RESULT_CLASS)
                    .with_text(&entry.result_label()),
            )
    });
    panel.with_child(DomElement::new("ul").with_children(rows))
}
