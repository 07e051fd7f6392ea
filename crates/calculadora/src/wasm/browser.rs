//! Browser bindings
//!
//! Turns the rendered [`DomElement`] tree into real DOM nodes, wires the
//! field and button listeners, and patches the output and history panels
//! after every event.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use super::calculator::{EventOutcome, WasmCalculator};
use super::console;
use super::dom::{DomElement, DomEvent};
use super::view::{button_id, CLEAR_BUTTON_ID, FIRST_INPUT_ID, SECOND_INPUT_ID};
use crate::core::Operator;

type Shared = Rc<RefCell<WasmCalculator>>;

/// Calculator mounted into a page element
#[wasm_bindgen]
#[derive(Debug)]
pub struct CalculatorWidget {
    calculator: Shared,
}

#[wasm_bindgen]
impl CalculatorWidget {
    /// Builds the calculator under the element with id `root_id`
    pub fn mount(root_id: &str) -> Result<CalculatorWidget, JsValue> {
        let document = document()?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id `{root_id}`")))?;

        let calculator: Shared = Rc::new(RefCell::new(WasmCalculator::new()));
        let tree = build_element(&document, &calculator.borrow().render())?;
        root.set_text_content(None);
        root.append_child(&tree)?;

        for field_id in [FIRST_INPUT_ID, SECOND_INPUT_ID] {
            listen(&document, &calculator, field_id, "input")?;
        }
        for operator in Operator::ALL {
            listen(&document, &calculator, button_id(operator), "click")?;
        }
        listen(&document, &calculator, CLEAR_BUTTON_ID, "click")?;

        info!(root_id, "calculator mounted");
        Ok(Self { calculator })
    }

    /// History as a JSON array, newest first
    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json(&self) -> String {
        self.calculator.borrow().history_json()
    }
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn listen(
    document: &Document,
    calculator: &Shared,
    id: &'static str,
    kind: &str,
) -> Result<(), JsValue> {
    let target = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element `{id}`")))?;

    let calculator = Rc::clone(calculator);
    let document = document.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let dom_event = match event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        {
            Some(input) if event.type_() == "input" => DomEvent::input(id, &input.value()),
            _ => DomEvent::click(id),
        };
        let outcome = calculator.borrow_mut().handle_event(&dom_event);
        if let Err(err) = refresh(&document, &calculator.borrow(), outcome) {
            warn!(?err, "failed to refresh view");
        }
    });

    target.add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    handler.forget();
    Ok(())
}

fn refresh(
    document: &Document,
    calculator: &WasmCalculator,
    outcome: EventOutcome,
) -> Result<(), JsValue> {
    match outcome {
        EventOutcome::InputChanged | EventOutcome::Ignored => Ok(()),
        EventOutcome::Recomputed => patch_panels(document, calculator),
        EventOutcome::Cleared => {
            patch_panels(document, calculator)?;
            let state = calculator.state();
            set_field(document, FIRST_INPUT_ID, state.num1_input())?;
            set_field(document, SECOND_INPUT_ID, state.num2_input())
        }
    }
}

fn patch_panels(document: &Document, calculator: &WasmCalculator) -> Result<(), JsValue> {
    for panel in [calculator.render_output(), calculator.render_history()] {
        let replacement = build_element(document, &panel)?;
        if let Some(current) = document.get_element_by_id(&panel.id) {
            current.replace_with_with_node_1(&replacement)?;
        }
    }
    Ok(())
}

fn set_field(document: &Document, id: &str, value: &str) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id(id) else {
        return Ok(());
    };
    let input: HtmlInputElement = element.dyn_into()?;
    if input.value() != value {
        input.set_value(value);
    }
    Ok(())
}

fn build_element(document: &Document, node: &DomElement) -> Result<Element, JsValue> {
    let element = document.create_element(&node.tag)?;
    if !node.id.is_empty() {
        element.set_id(&node.id);
    }
    if !node.classes.is_empty() {
        element.set_class_name(&node.classes.join(" "));
    }
    for (name, value) in &node.attributes {
        element.set_attribute(name, value)?;
    }
    if !node.text_content.is_empty() {
        element.set_text_content(Some(&node.text_content));
    }
    for child in &node.children {
        let child = build_element(document, child)?;
        element.append_child(&child)?;
    }
    Ok(element)
}

/// Module entry point: panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console::init_logging() {
        info!(max_level = %console::MAX_LEVEL, "calculadora wasm initialized");
    }
}
