//! The same scenarios, checked through the browser view and the terminal app

#![cfg(not(target_arch = "wasm32"))]

use calculadora::driver::{
    run_all_scenarios, verify_addition, verify_basic_arithmetic, verify_clear,
    verify_division_by_zero, verify_fractional_division, verify_history_cap,
    verify_initial_state, verify_invalid_number,
};
use calculadora::prelude::*;
use proptest::prelude::*;

// ===== Browser view =====

#[test]
fn test_wasm_scenarios_on_one_instance() {
    run_all_scenarios(&mut WasmDriver::new());
}

#[test]
fn test_wasm_scenarios_in_reverse_order() {
    let mut driver = WasmDriver::new();
    verify_initial_state(&mut driver);
    verify_clear(&mut driver);
    verify_history_cap(&mut driver);
    verify_invalid_number(&mut driver);
    verify_division_by_zero(&mut driver);
    verify_basic_arithmetic(&mut driver);
    verify_fractional_division(&mut driver);
    verify_addition(&mut driver);
}

// ===== Terminal app =====

#[cfg(feature = "tui")]
mod terminal {
    use super::*;
    use calculadora::tui::{CalculatorApp, InputHandler, KeyAction};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(app: &mut CalculatorApp, code: KeyCode) {
        let handler = InputHandler::new();
        let event = KeyEvent::new(code, KeyModifiers::NONE);
        let action = handler.handle_key(event, app.focused_text());
        app.handle_action(action);
    }

    fn type_str(app: &mut CalculatorApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_tui_scenarios_on_one_instance() {
        run_all_scenarios(&mut TuiDriver::new());
    }

    #[test]
    fn test_keyboard_session() {
        let mut app = CalculatorApp::new();
        type_str(&mut app, "-4");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "2.5e");
        type_str(&mut app, "-1");
        press(&mut app, KeyCode::Char('*'));

        assert_eq!(app.state().num1_input(), "-4");
        assert_eq!(app.state().num2_input(), "2.5e-1");
        assert_eq!(app.state().display().message(), "Resultado: -1");
        assert_eq!(app.state().history().newest().unwrap().expression(), "-4 × 0.25");
    }

    #[test]
    fn test_keyboard_minus_as_operator() {
        let mut app = CalculatorApp::new();
        type_str(&mut app, "3");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "10-");
        assert_eq!(app.state().display().message(), "Resultado: -7");
    }

    #[test]
    fn test_keyboard_escape_then_quit() {
        let mut app = CalculatorApp::new();
        type_str(&mut app, "1");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "1+");
        press(&mut app, KeyCode::Esc);
        assert!(app.state().num1_input().is_empty());
        assert_eq!(app.state().history().len(), 1);

        app.handle_action(
            InputHandler::new().handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                app.focused_text(),
            ),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn test_backtab_returns_to_first_field() {
        let mut app = CalculatorApp::new();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::BackTab);
        type_str(&mut app, "9");
        assert_eq!(app.state().num1_input(), "9");
        assert!(matches!(
            InputHandler::new().handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), ""),
            KeyAction::Clear
        ));
    }

    const OPERAND: &str = "[-+ ]?[0-9]{0,4}(\\.[0-9]{0,3})?[a-z]{0,2}";

    fn operator_strategy() -> impl Strategy<Value = Operator> {
        prop_oneof![
            Just(Operator::Add),
            Just(Operator::Subtract),
            Just(Operator::Multiply),
            Just(Operator::Divide),
        ]
    }

    proptest! {
        /// Both front ends show the same output and history for any input
        #[test]
        fn prop_front_ends_agree(
            calls in proptest::collection::vec(
                (OPERAND, OPERAND, operator_strategy()),
                1..15,
            )
        ) {
            let mut browser = WasmDriver::new();
            let mut terminal = TuiDriver::new();
            for (first, second, op) in &calls {
                let shown = browser.calculate(first, second, *op);
                prop_assert_eq!(terminal.calculate(first, second, *op), shown);
            }
            prop_assert_eq!(browser.history(), terminal.history());
            prop_assert_eq!(browser.inputs(), terminal.inputs());
        }
    }
}
