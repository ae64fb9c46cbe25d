//! Keypad Calculator - button-driven arithmetic state machine
//!
//! A pocket-calculator core: digits, decimal point, the four binary
//! operators, equals, sign toggle, percent and clear. One pending operator
//! at a time, folded left to right; there is no expression parser.
//!
//! # Principles
//!
//! - **Error prevention**: input events are an exhaustive enum, digits a
//!   validated newtype
//! - **In-band errors**: division by zero yields a non-finite operand that
//!   renders as `Error`; no transition ever fails
//! - **One-way data flow**: label → input → transition → formatter → frame
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for label in ["1", "2", "+", "3", "="] {
//!     calc.handle_input(label);
//! }
//! assert_eq!(calc.frame().current, "15");
//!
//! // Pure transition function
//! let state = CalculatorState::new()
//!     .apply(Input::digit(5).unwrap())
//!     .apply(Input::Percent);
//! assert_eq!(state.current(), "0.05");
//! ```

// Allow common test patterns in this crate
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

pub mod calculator;
pub mod core;
pub mod driver;
pub mod format;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::{Calculator, FrameListener};
    pub use crate::core::{
        evaluate, CalcError, CalcResult, CalculatorState, Digit, Input, Operator,
        MAX_OPERAND_LEN,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::format::{DisplayFrame, Formatter, ERROR_TEXT};
    pub use crate::keypad::{ButtonKind, Keypad, KeypadButton};
}
