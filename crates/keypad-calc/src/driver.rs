//! Unified calculator driver
//!
//! Scenario logic is written once against [`CalculatorDriver`] and run
//! against every front end that forwards button labels.

use crate::calculator::Calculator;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calc::prelude::*;
///
/// fn verify_folding<D: CalculatorDriver>(driver: &mut D) {
///     driver.press_sequence("1 + 2 + 3 =");
///     assert_eq!(driver.display(), "6");
/// }
///
/// verify_folding(&mut Calculator::new());
/// ```
pub trait CalculatorDriver {
    /// Presses one button by label
    fn press(&mut self, label: &str);

    /// Gets the main display line
    fn display(&self) -> String;

    /// Gets the pending-expression line
    fn expression(&self) -> String;

    /// Clears the calculator state
    fn clear(&mut self) {
        self.press("AC");
    }

    /// Presses every label in order
    fn press_all(&mut self, labels: &[&str]) {
        for label in labels {
            self.press(label);
        }
    }

    /// Presses whitespace-separated labels, e.g. `"1 2 + 3 ="`
    fn press_sequence(&mut self, sequence: &str) {
        for label in sequence.split_whitespace() {
            self.press(label);
        }
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, label: &str) {
        self.handle_input(label);
    }

    fn display(&self) -> String {
        self.frame().current
    }

    fn expression(&self) -> String {
        self.frame().expression
    }
}
