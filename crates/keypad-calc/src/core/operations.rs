//! Binary operators and the fold routine
//!
//! Only one operator is ever pending, so evaluation is a single
//! `a op b` step on parsed operands.

use serde::{Deserialize, Serialize};

use crate::core::number::{parse_operand, stringify};

/// Type-safe operator enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol, which doubles as its button label
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Parses an operator from its symbol
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Division by zero is not trapped: it yields an infinity or NaN.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Folds `previous op current` into a canonical operand string.
///
/// A missing previous operand counts as zero. With no operator the
/// current operand is returned untouched.
#[must_use]
pub fn evaluate(previous: Option<&str>, current: &str, operator: Option<Operator>) -> String {
    let Some(op) = operator else {
        return current.to_string();
    };
    let a = previous.map_or(0.0, parse_operand);
    let b = parse_operand(current);
    stringify(op.apply(a, b))
}
