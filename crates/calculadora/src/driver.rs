//! Front-end neutral calculator driver
//!
//! Scenario checks are written once against [`CalculatorDriver`] and run
//! against every front end: the browser view through its mock DOM and the
//! terminal app through its key actions.

use crate::core::{History, Operator};
use crate::labels;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust,ignore
/// fn check<D: CalculatorDriver>(driver: &mut D) {
///     driver.calculate("4", "5", Operator::Add);
///     assert_eq!(driver.output_text(), "Resultado: 9");
/// }
/// ```
pub trait CalculatorDriver {
    /// Replaces the text of the first operand field
    fn set_first_operand(&mut self, text: &str);

    /// Replaces the text of the second operand field
    fn set_second_operand(&mut self, text: &str);

    /// Triggers an operator control
    fn press_operator(&mut self, operator: Operator);

    /// Triggers the clear control
    fn press_clear(&mut self);

    /// Text currently shown in the output panel
    fn output_text(&self) -> String;

    /// Current text of both operand fields
    fn inputs(&self) -> (String, String);

    /// History rows as shown, top to bottom (newest first)
    fn history(&self) -> Vec<HistoryItem>;

    /// Fills both fields, presses `operator` and returns the output text
    fn calculate(&mut self, first: &str, second: &str, operator: Operator) -> String {
        self.set_first_operand(first);
        self.set_second_operand(second);
        self.press_operator(operator);
        self.output_text()
    }
}

/// A history row as a front end shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// Left side, e.g. `4 + 5`
    pub expression: String,
    /// Formatted result without the `= ` prefix
    pub result: String,
}

impl HistoryItem {
    /// Builds the rows for a history, newest first
    #[must_use]
    pub fn from_history(history: &History) -> Vec<Self> {
        history
            .iter()
            .map(|entry| Self {
                expression: entry.expression(),
                result: entry.result().to_string(),
            })
            .collect()
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, HistoryItem};
    use crate::core::Operator;
    use crate::tui::{CalculatorApp, Field, KeyAction};

    /// Terminal driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }

        fn retype(&mut self, field: Field, text: &str) {
            self.app.focus(field);
            self.app.set_field(field, "");
            for c in text.chars() {
                self.app.handle_action(KeyAction::InsertChar(c));
            }
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn set_first_operand(&mut self, text: &str) {
            self.retype(Field::First, text);
        }

        fn set_second_operand(&mut self, text: &str) {
            self.retype(Field::Second, text);
        }

        fn press_operator(&mut self, operator: Operator) {
            self.app.handle_action(KeyAction::Operator(operator));
        }

        fn press_clear(&mut self) {
            self.app.handle_action(KeyAction::Clear);
        }

        fn output_text(&self) -> String {
            self.app.state().display().message()
        }

        fn inputs(&self) -> (String, String) {
            let state = self.app.state();
            (
                state.num1_input().to_string(),
                state.num2_input().to_string(),
            )
        }

        fn history(&self) -> Vec<HistoryItem> {
            HistoryItem::from_history(self.app.state().history())
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenario checks =====
// These run against ANY CalculatorDriver implementation

/// Fresh component shows the idle prompt and an empty history
pub fn verify_initial_state<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(driver.output_text(), labels::IDLE_PROMPT);
    assert_eq!(driver.inputs(), (String::new(), String::new()));
    assert!(driver.history().is_empty());
}

/// `4 + 5` shows `Resultado: 9` and records one row
pub fn verify_addition<D: CalculatorDriver>(driver: &mut D) {
    let before = driver.history().len();
    assert_eq!(driver.calculate("4", "5", Operator::Add), "Resultado: 9");

    let history = driver.history();
    assert_eq!(history.len(), (before + 1).min(History::CAPACITY));
    assert_eq!(history[0].expression, "4 + 5");
    assert_eq!(history[0].result, "9");
}

/// `7 ÷ 2` shows four decimals
pub fn verify_fractional_division<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(
        driver.calculate("7", "2", Operator::Divide),
        "Resultado: 3.5000"
    );
    assert_eq!(driver.history()[0].result, "3.5000");
}

/// All four operators, including operand order for subtraction
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(driver.calculate("6", "2", Operator::Add), "Resultado: 8");
    assert_eq!(
        driver.calculate("3", "10", Operator::Subtract),
        "Resultado: -7"
    );
    assert_eq!(
        driver.calculate("6", "7", Operator::Multiply),
        "Resultado: 42"
    );
    assert_eq!(driver.calculate("20", "4", Operator::Divide), "Resultado: 5");
    assert_eq!(driver.history()[2].expression, "3 − 10");
}

/// `5 ÷ 0` shows the division error and records nothing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    let before = driver.history();
    assert_eq!(
        driver.calculate("5", "0", Operator::Divide),
        "Error: No se puede dividir por cero"
    );
    assert_eq!(driver.history(), before);
}

/// `abc + 3` shows the invalid-number error and records nothing
pub fn verify_invalid_number<D: CalculatorDriver>(driver: &mut D) {
    let before = driver.history();
    assert_eq!(
        driver.calculate("abc", "3", Operator::Add),
        "Por favor ingresa números válidos"
    );
    assert_eq!(driver.history(), before);

    assert_eq!(
        driver.calculate("", "", Operator::Multiply),
        "Por favor ingresa números válidos"
    );
}

/// Twelve computations leave the last ten, newest first
pub fn verify_history_cap<D: CalculatorDriver>(driver: &mut D) {
    for i in 1..=12 {
        driver.calculate(&i.to_string(), "1", Operator::Multiply);
    }
    let results: Vec<String> = driver.history().into_iter().map(|h| h.result).collect();
    let expected: Vec<String> = (3..=12).rev().map(|i: i32| i.to_string()).collect();
    assert_eq!(results, expected);
}

/// Clear empties the fields, resets the output and keeps history
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.calculate("2", "2", Operator::Add);
    let before = driver.history();
    driver.press_clear();
    assert_eq!(driver.inputs(), (String::new(), String::new()));
    assert_eq!(driver.output_text(), labels::IDLE_PROMPT);
    assert_eq!(driver.history(), before);
}

/// Runs every scenario check in sequence on one driver
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_initial_state(driver);
    verify_addition(driver);
    verify_fractional_division(driver);
    verify_basic_arithmetic(driver);
    verify_division_by_zero(driver);
    verify_invalid_number(driver);
    verify_history_cap(driver);
    verify_clear(driver);
}
