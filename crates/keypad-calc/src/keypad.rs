//! Keypad layout for the calculator
//!
//! Layout:
//! ```text
//! [ AC ] [ +/- ] [ % ] [ / ]
//! [ 7  ] [  8  ] [ 9 ] [ * ]
//! [ 4  ] [  5  ] [ 6 ] [ - ]
//! [ 1  ] [  2  ] [ 3 ] [ + ]
//! [     0      ] [ . ] [ = ]
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Digit, Input, Operator};

/// Visual group a button belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonKind {
    /// Clear, sign toggle and percent
    Function,
    /// Binary operators and equals
    Operator,
    /// Digits and the decimal point
    Number,
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// The input event this button sends
    pub input: Input,
    /// Stable identifier, e.g. `btn-7` or `btn-divide`
    pub id: String,
    /// Visual group
    pub kind: ButtonKind,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button covers
    pub span: usize,
}

impl KeypadButton {
    /// Creates a single-column button
    #[must_use]
    pub fn new(input: Input, row: usize, col: usize) -> Self {
        Self::spanning(input, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn spanning(input: Input, row: usize, col: usize, span: usize) -> Self {
        let id = match input {
            Input::Digit(d) => format!("btn-{}", d.value()),
            Input::Decimal => "btn-decimal".to_string(),
            Input::Operator(op) => format!("btn-{}", op_name(op)),
            Input::Equals => "btn-equals".to_string(),
            Input::Clear => "btn-clear".to_string(),
            Input::ToggleSign => "btn-toggle-sign".to_string(),
            Input::Percent => "btn-percent".to_string(),
        };
        let kind = match input {
            Input::Clear | Input::ToggleSign | Input::Percent => ButtonKind::Function,
            Input::Operator(_) | Input::Equals => ButtonKind::Operator,
            Input::Digit(_) | Input::Decimal => ButtonKind::Number,
        };
        Self {
            input,
            id,
            kind,
            row,
            col,
            span,
        }
    }

    /// The label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.input.label()
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// Returns a name for an operator (for button IDs)
const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// The standard 5x4 calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let digit = |d: usize| Input::Digit(Digit::ALL[d]);
        let op = Input::Operator;
        let buttons = vec![
            // Row 0: AC +/- % /
            KeypadButton::new(Input::Clear, 0, 0),
            KeypadButton::new(Input::ToggleSign, 0, 1),
            KeypadButton::new(Input::Percent, 0, 2),
            KeypadButton::new(op(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 *
            KeypadButton::new(digit(7), 1, 0),
            KeypadButton::new(digit(8), 1, 1),
            KeypadButton::new(digit(9), 1, 2),
            KeypadButton::new(op(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButton::new(digit(4), 2, 0),
            KeypadButton::new(digit(5), 2, 1),
            KeypadButton::new(digit(6), 2, 2),
            KeypadButton::new(op(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::new(digit(1), 3, 0),
            KeypadButton::new(digit(2), 3, 1),
            KeypadButton::new(digit(3), 3, 2),
            KeypadButton::new(op(Operator::Add), 3, 3),
            // Row 4: 0 (wide) . =
            KeypadButton::spanning(digit(0), 4, 0, 2),
            KeypadButton::new(Input::Decimal, 4, 2),
            KeypadButton::new(Input::Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadButton> {
        let input = Input::from_label(label).ok()?;
        self.buttons.iter().find(|b| b.input == input)
    }

    /// Finds a button by its ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Buttons of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// All labels in row-major order
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.buttons.iter().map(KeypadButton::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_count(), 19);
    }

    #[test]
    fn test_every_cell_is_covered() {
        let keypad = Keypad::new();
        for row in 0..5 {
            for col in 0..4 {
                assert!(keypad.get_button_at(row, col).is_some(), "({row}, {col})");
            }
        }
    }

    #[test]
    fn test_wide_zero_button() {
        let keypad = Keypad::new();
        let left = keypad.get_button_at(4, 0).unwrap();
        let right = keypad.get_button_at(4, 1).unwrap();
        assert_eq!(left, right);
        assert_eq!(left.label(), "0");
        assert_eq!(left.span, 2);
    }

    #[test]
    fn test_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_top_row_labels() {
        let keypad = Keypad::new();
        let labels: Vec<_> = keypad.row(0).map(KeypadButton::label).collect();
        assert_eq!(labels, vec!["AC", "+/-", "%", "/"]);
    }

    #[test]
    fn test_find_by_label() {
        let keypad = Keypad::new();
        let btn = keypad.find_by_label("*").unwrap();
        assert_eq!(btn.id, "btn-times");
        assert_eq!(btn.kind, ButtonKind::Operator);
        assert_eq!((btn.row, btn.col), (1, 3));
        assert!(keypad.find_by_label("^").is_none());
    }

    #[test]
    fn test_button_kinds() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_by_label("AC").unwrap().kind, ButtonKind::Function);
        assert_eq!(keypad.find_by_label("=").unwrap().kind, ButtonKind::Operator);
        assert_eq!(keypad.find_by_label(".").unwrap().kind, ButtonKind::Number);
    }

    #[test]
    fn test_labels_cover_all_tokens() {
        let mut labels = Keypad::new().labels();
        labels.sort();
        let mut expected: Vec<String> = [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "=", "AC",
            "+/-", "%",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
        expected.sort();
        assert_eq!(labels, expected);
    }
}
