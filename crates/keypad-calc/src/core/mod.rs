//! Calculator core: input events, the state machine and arithmetic
//!
//! Every transition is a pure function of `(state, input)`; numeric
//! failures travel in-band as non-finite operand strings.

pub mod number;
mod operations;
pub mod state;

pub use operations::{evaluate, Operator};
pub use state::{CalculatorState, Digit, Input, MAX_OPERAND_LEN};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Arithmetic never fails; these only describe malformed input events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Button label that maps to no input event
    #[error("Unknown button label: {0:?}")]
    UnknownLabel(String),
    /// Digit outside 0..=9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
}
