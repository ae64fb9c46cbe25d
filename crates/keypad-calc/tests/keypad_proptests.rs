//! Property-based tests for the keypad layout and label dispatch

#![allow(clippy::unwrap_used)]

use keypad_calc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any operator
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Generate any input event
fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        digit_strategy().prop_map(|d| Input::digit(d).unwrap()),
        Just(Input::Decimal),
        operator_strategy().prop_map(Input::Operator),
        Just(Input::Equals),
        Just(Input::Clear),
        Just(Input::ToggleSign),
        Just(Input::Percent),
    ]
}

/// Generate valid grid positions
fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5usize, 0usize..4usize)
}

// ===== Label dispatch =====

proptest! {
    /// Every input round-trips through its label
    #[test]
    fn prop_label_round_trip(input in input_strategy()) {
        prop_assert_eq!(Input::from_label(&input.label()), Ok(input));
    }

    /// Every input has a button on the keypad
    #[test]
    fn prop_every_input_has_button(input in input_strategy()) {
        let keypad = Keypad::new();
        let button = keypad.find_by_label(&input.label());
        prop_assert!(button.is_some());
        prop_assert_eq!(button.unwrap().input, input);
    }

    /// Out-of-range digits are rejected
    #[test]
    fn prop_invalid_digits_rejected(d in 10u8..=255u8) {
        prop_assert_eq!(Digit::new(d), Err(CalcError::InvalidDigit(d)));
        prop_assert!(Input::digit(d).is_none());
    }

    /// Multi-letter words are never labels, except the clear button
    #[test]
    fn prop_words_are_unknown(word in "[a-zA-Z]{2,10}") {
        let result = Input::from_label(&word);
        if word == "AC" {
            prop_assert_eq!(result, Ok(Input::Clear));
        } else {
            prop_assert_eq!(result, Err(CalcError::UnknownLabel(word.clone())));
        }
    }
}

// ===== Layout =====

proptest! {
    /// Button at valid position should exist
    #[test]
    fn prop_button_at_valid_position_exists((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_some());
    }

    /// Button at invalid row should not exist
    #[test]
    fn prop_button_at_invalid_row_missing(row in 5usize..100usize, col in 0usize..4usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// Button at invalid col should not exist
    #[test]
    fn prop_button_at_invalid_col_missing(row in 0usize..5usize, col in 4usize..100usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// Looking a button up by ID gives back the button covering the cell
    #[test]
    fn prop_button_id_position_consistency((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let btn = keypad.get_button_at(row, col).unwrap();
        let found = keypad.find_by_id(&btn.id).unwrap();
        prop_assert!(found.covers(row, col));
    }
}

// ===== Invariant tests =====

#[test]
fn invariant_ids_unique() {
    let keypad = Keypad::new();
    let mut ids = std::collections::HashSet::new();
    for btn in keypad.buttons() {
        assert!(ids.insert(btn.id.clone()), "Duplicate ID: {}", btn.id);
    }
}

#[test]
fn invariant_cells_covered_exactly_once() {
    let keypad = Keypad::new();
    let (rows, cols) = keypad.dimensions();
    for row in 0..rows {
        for col in 0..cols {
            let count = keypad.buttons().iter().filter(|b| b.covers(row, col)).count();
            assert_eq!(count, 1, "cell ({row}, {col})");
        }
    }
}

#[test]
fn invariant_keypad_has_special_buttons() {
    let keypad = Keypad::new();
    for id in ["btn-equals", "btn-clear", "btn-decimal", "btn-toggle-sign", "btn-percent"] {
        assert!(keypad.find_by_id(id).is_some(), "Missing {id}");
    }
}
