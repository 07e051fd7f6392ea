//! Browser front end
//!
//! The view, event mapping and mock DOM are plain Rust and always compiled,
//! so they are tested natively. Only `browser` and its `console` log sink
//! need the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
#[cfg(feature = "wasm")]
mod console;
mod dom;
mod driver;
pub mod view;

#[cfg(feature = "wasm")]
pub use browser::CalculatorWidget;
pub use calculator::{EventOutcome, WasmCalculator};
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
