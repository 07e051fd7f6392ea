//! Calculator core: state, arithmetic, number handling and history
//!
//! Everything in here is platform-neutral and synchronous. The front ends
//! (`wasm`, `tui`) only project [`CalculatorState`] and feed it events.

pub mod history;
pub mod numeric;
mod operations;
mod state;

pub use history::{History, HistoryEntry};
pub use operations::Operator;
pub use state::{CalculatorState, DisplayState};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// User-input errors raised by a computation.
///
/// The `Display` text is the exact message shown in the output panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// One of the operands has no numeric prefix
    #[error("Por favor ingresa números válidos")]
    InvalidNumber,
    /// Division with a second operand of exactly zero
    #[error("Error: No se puede dividir por cero")]
    DivisionByZero,
}
