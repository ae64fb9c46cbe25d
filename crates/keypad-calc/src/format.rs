//! Display formatting for operand strings
//!
//! Integer parts are grouped as text, so arbitrarily long operands keep
//! every digit. Decimal parts are reattached exactly as typed.

use serde::{Deserialize, Serialize};

use crate::core::number::parse_operand;
use crate::core::{CalculatorState, Operator};

/// Text shown in place of a non-finite operand
pub const ERROR_TEXT: &str = "Error";

/// What the presentation layer renders after each event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// Formatted current operand (main display line)
    pub current: String,
    /// Formatted `"<previous> <operator>"`, or empty when nothing is pending
    pub expression: String,
}

/// Operand formatter with configurable digit grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Formatter {
    /// Thousands separator placed between digit groups
    pub group_separator: char,
    /// Digits per group; 0 disables grouping
    pub group_size: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// Default separator (en-US)
    pub const DEFAULT_SEPARATOR: char = ',';
    /// Default group size
    pub const DEFAULT_GROUP_SIZE: usize = 3;

    /// Creates a formatter with en-US grouping
    #[must_use]
    pub const fn new() -> Self {
        Self {
            group_separator: Self::DEFAULT_SEPARATOR,
            group_size: Self::DEFAULT_GROUP_SIZE,
        }
    }

    /// Sets the group separator
    #[must_use]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.group_separator = separator;
        self
    }

    /// Sets the group size
    #[must_use]
    pub const fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = size;
        self
    }

    /// Formats an operand string for display.
    ///
    /// Non-finite values and malformed text render as [`ERROR_TEXT`].
    #[must_use]
    pub fn format_operand(&self, operand: &str) -> String {
        if !parse_operand(operand).is_finite() {
            return ERROR_TEXT.to_string();
        }

        let (integer, fraction) = match operand.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (operand, None),
        };
        let (sign, digits) = integer
            .strip_prefix('-')
            .map_or(("", integer), |rest| ("-", rest));

        if !is_digits(digits) || fraction.is_some_and(|f| !is_digits(f)) {
            return ERROR_TEXT.to_string();
        }

        let digits = digits.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };

        let mut out = String::with_capacity(operand.len() + operand.len() / 3 + 1);
        out.push_str(sign);
        out.push_str(&self.group_digits(digits));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Formats the pending-computation line, empty unless both parts exist
    #[must_use]
    pub fn format_expression(&self, previous: Option<&str>, operator: Option<Operator>) -> String {
        match (previous, operator) {
            (Some(previous), Some(op)) => {
                format!("{} {}", self.format_operand(previous), op.symbol())
            }
            _ => String::new(),
        }
    }

    /// Renders both display lines for a state
    #[must_use]
    pub fn frame(&self, state: &CalculatorState) -> DisplayFrame {
        DisplayFrame {
            current: self.format_operand(state.current()),
            expression: self.format_expression(state.previous(), state.operator()),
        }
    }

    fn group_digits(&self, digits: &str) -> String {
        if self.group_size == 0 {
            return digits.to_string();
        }
        let len = digits.len();
        let mut out = String::with_capacity(len + len / self.group_size);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % self.group_size == 0 {
                out.push(self.group_separator);
            }
            out.push(ch);
        }
        out
    }
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Input;

    fn fmt(operand: &str) -> String {
        Formatter::new().format_operand(operand)
    }

    // ===== Grouping =====

    #[test]
    fn test_small_integers_unchanged() {
        assert_eq!(fmt("0"), "0");
        assert_eq!(fmt("15"), "15");
        assert_eq!(fmt("999"), "999");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(fmt("1000"), "1,000");
        assert_eq!(fmt("1234567"), "1,234,567");
        assert_eq!(fmt("100000"), "100,000");
    }

    #[test]
    fn test_grouping_beyond_64_bits() {
        assert_eq!(
            fmt("123456789012345678901234567890"),
            "123,456,789,012,345,678,901,234,567,890"
        );
    }

    #[test]
    fn test_negative_grouping() {
        assert_eq!(fmt("-9"), "-9");
        assert_eq!(fmt("-1234"), "-1,234");
        assert_eq!(fmt("-0.5"), "-0.5");
    }

    // ===== Decimal part =====

    #[test]
    fn test_decimal_part_verbatim() {
        assert_eq!(fmt("0.05"), "0.05");
        assert_eq!(fmt("1234.5000"), "1,234.5000");
        assert_eq!(fmt("0."), "0.");
        assert_eq!(fmt("0.30000000000000004"), "0.30000000000000004");
    }

    #[test]
    fn test_decimal_part_not_grouped() {
        assert_eq!(fmt("1.23456789"), "1.23456789");
    }

    // ===== Errors =====

    #[test]
    fn test_non_finite_is_error() {
        assert_eq!(fmt("NaN"), ERROR_TEXT);
        assert_eq!(fmt("Infinity"), ERROR_TEXT);
        assert_eq!(fmt("-Infinity"), ERROR_TEXT);
    }

    #[test]
    fn test_malformed_is_error() {
        assert_eq!(fmt("12a"), ERROR_TEXT);
        assert_eq!(fmt("1.2.3"), ERROR_TEXT);
        assert_eq!(fmt("--1"), ERROR_TEXT);
    }

    #[test]
    fn test_empty_integer_part_is_zero() {
        assert_eq!(fmt(""), "0");
        assert_eq!(fmt(".5"), "0.5");
    }

    // ===== Configuration =====

    #[test]
    fn test_custom_separator() {
        let f = Formatter::new().with_separator('.');
        assert_eq!(f.format_operand("1234567"), "1.234.567");
    }

    #[test]
    fn test_custom_group_size() {
        let f = Formatter::new().with_group_size(4).with_separator(' ');
        assert_eq!(f.format_operand("123456789"), "1 2345 6789");
    }

    #[test]
    fn test_grouping_disabled() {
        let f = Formatter::new().with_group_size(0);
        assert_eq!(f.format_operand("1234567"), "1234567");
    }

    #[test]
    fn test_formatter_serde_defaults() {
        let f: Formatter = serde_json::from_str("{\"group_separator\":\"_\"}").unwrap();
        assert_eq!(f.group_separator, '_');
        assert_eq!(f.group_size, Formatter::DEFAULT_GROUP_SIZE);
    }

    // ===== Expression line / frames =====

    #[test]
    fn test_expression_requires_both_parts() {
        let f = Formatter::new();
        assert_eq!(f.format_expression(Some("1200"), Some(Operator::Add)), "1,200 +");
        assert_eq!(f.format_expression(Some("1200"), None), "");
        assert_eq!(f.format_expression(None, Some(Operator::Add)), "");
    }

    #[test]
    fn test_frame_for_state() {
        let state = ["4", "5", "6", "7", "*"]
            .iter()
            .fold(CalculatorState::new(), |s, l| s.apply(Input::from_label(l).unwrap()));
        let frame = Formatter::new().frame(&state);
        assert_eq!(frame.current, "4,567");
        assert_eq!(frame.expression, "4,567 *");
    }

    #[test]
    fn test_frame_initial() {
        let frame = Formatter::new().frame(&CalculatorState::new());
        assert_eq!(frame.current, "0");
        assert!(frame.expression.is_empty());
    }
}
