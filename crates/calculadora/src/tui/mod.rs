//! Terminal front end

mod app;
mod input;
mod ui;

pub use app::{CalculatorApp, Field};
pub use input::{InputHandler, KeyAction};
pub use ui::{render, CalculatorUI, HistoryPanel};
