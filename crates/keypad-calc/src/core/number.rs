//! Conversions between operand strings and `f64`

/// Sentinel text for a not-a-number operand
pub const NAN_TEXT: &str = "NaN";
/// Sentinel text for a positive infinite operand
pub const INFINITY_TEXT: &str = "Infinity";
/// Sentinel text for a negative infinite operand
pub const NEG_INFINITY_TEXT: &str = "-Infinity";

/// Parses an operand string; unparsable text counts as zero.
///
/// The error sentinels (`NaN`, `Infinity`, `-Infinity`) parse back to
/// their non-finite values so errors keep propagating through folds.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Renders a value in canonical operand form.
///
/// Shortest round-trip digits, no exponent notation, and negative zero
/// collapses to `"0"`.
#[must_use]
pub fn stringify(value: f64) -> String {
    if value.is_nan() {
        NAN_TEXT.to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            INFINITY_TEXT.to_string()
        } else {
            NEG_INFINITY_TEXT.to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}
