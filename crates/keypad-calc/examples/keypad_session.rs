//! Walks through a short keypad session, printing both display lines
//!
//! Run with: `cargo run -p keypad-calc --example keypad_session`

#![allow(clippy::print_stdout)]

use keypad_calc::prelude::*;

fn main() {
    let mut calc = Calculator::new();
    calc.subscribe(|frame| {
        println!("{:>24}", frame.expression);
        println!("{:>24}", frame.current);
        println!("{}", "-".repeat(24));
    });

    for label in ["1", "2", "3", "4", "*", "5", "+", "6", "=", "+/-", "%", "/", "0", "="] {
        println!("press {label}");
        calc.handle_input(label);
    }
}
