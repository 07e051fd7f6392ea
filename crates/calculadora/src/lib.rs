//! Calculadora - two-operand calculator with a bounded history
//!
//! One platform-neutral core drives two front ends:
//!
//! - a browser view (`wasm` module), rendered as a DOM tree and mounted
//!   with `CalculatorWidget` when built with the `wasm` feature
//! - a terminal app (`tui` module, `tui` feature) built on ratatui
//!
//! # Example
//!
//! ```rust
//! use calculadora::prelude::*;
//!
//! let mut state = CalculatorState::new();
//! state.set_first_operand("7");
//! state.set_second_operand("2");
//!
//! let state = state.compute(Operator::Divide);
//! assert_eq!(state.display().message(), "Resultado: 3.5000");
//! assert_eq!(state.history().len(), 1);
//!
//! let state = state.clear();
//! assert_eq!(state.result(), None);
//! assert_eq!(state.history().len(), 1);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod labels;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser front end. The mock DOM keeps it testable without a browser.
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::numeric::{format_number, format_result, parse_number};
    pub use crate::core::{CalcError, CalcResult, CalculatorState, DisplayState, Operator};
    pub use crate::driver::{CalculatorDriver, HistoryItem};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    #[cfg(feature = "wasm")]
    pub use crate::wasm::CalculatorWidget;
    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmCalculator, WasmDriver};
}
