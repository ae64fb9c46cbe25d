//! Calculator state record and its transition function

use serde::{Deserialize, Serialize};

use crate::core::number::{parse_operand, stringify};
use crate::core::{evaluate, CalcError, CalcResult, Operator};

/// Digit entry stops growing the current operand at this many characters
pub const MAX_OPERAND_LEN: usize = 16;

/// A single decimal digit, guaranteed to be in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// All ten digits, indexed by value
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, rejecting values above 9
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }

    /// Numeric value of the digit
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character of the digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Input events accepted by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Enter a digit
    Digit(Digit),
    /// Enter the decimal point
    Decimal,
    /// Choose a pending operator, folding any complete computation
    Operator(Operator),
    /// Evaluate the pending computation
    Equals,
    /// Reset to the initial state (`AC`)
    Clear,
    /// Negate the current operand (`+/-`)
    ToggleSign,
    /// Divide the current operand by 100 (`%`)
    Percent,
}

impl Input {
    /// Label of the clear button
    pub const CLEAR_LABEL: &'static str = "AC";
    /// Label of the sign toggle button
    pub const TOGGLE_SIGN_LABEL: &'static str = "+/-";

    /// Maps a button label to its input event
    pub fn from_label(label: &str) -> CalcResult<Self> {
        match label {
            Self::CLEAR_LABEL => Ok(Self::Clear),
            Self::TOGGLE_SIGN_LABEL => Ok(Self::ToggleSign),
            "%" => Ok(Self::Percent),
            "=" => Ok(Self::Equals),
            "." => Ok(Self::Decimal),
            _ => {
                if let Some(op) = Operator::from_symbol(label) {
                    return Ok(Self::Operator(op));
                }
                match label.as_bytes() {
                    [b @ b'0'..=b'9'] => Ok(Self::Digit(Digit(*b - b'0'))),
                    _ => Err(CalcError::UnknownLabel(label.to_string())),
                }
            }
        }
    }

    /// Returns the button label for this input
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.as_char().to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => Self::CLEAR_LABEL.to_string(),
            Self::ToggleSign => Self::TOGGLE_SIGN_LABEL.to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Shorthand for a digit input; `None` above 9
    #[must_use]
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).ok().map(Self::Digit)
    }
}

/// The single calculator state record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    current: String,
    previous: Option<String>,
    operator: Option<Operator>,
    overwrite: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the initial state: `"0"`, nothing pending, overwrite on
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            operator: None,
            overwrite: true,
        }
    }

    /// Operand being entered or displayed
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Operand captured when the pending operator was chosen
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Operator awaiting its second operand
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the next digit starts a fresh operand
    #[must_use]
    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Returns true if the state equals the initial state
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::new()
    }

    /// Produces the next state for one input event
    #[must_use]
    pub fn apply(mut self, input: Input) -> Self {
        match input {
            Input::Digit(digit) => self.enter_digit(digit),
            Input::Decimal => self.enter_decimal(),
            Input::Operator(op) => self.choose_operator(op),
            Input::Equals => self.equals(),
            Input::Clear => return Self::new(),
            Input::ToggleSign => {
                self.current = stringify(-parse_operand(&self.current));
            }
            Input::Percent => {
                self.current = stringify(parse_operand(&self.current) / 100.0);
            }
        }
        self
    }

    fn enter_digit(&mut self, digit: Digit) {
        if self.overwrite {
            self.current = digit.as_char().to_string();
            self.overwrite = false;
        } else if self.current == "0" {
            if digit.value() != 0 {
                self.current = digit.as_char().to_string();
            }
        } else if self.current.len() < MAX_OPERAND_LEN {
            self.current.push(digit.as_char());
        }
    }

    fn enter_decimal(&mut self) {
        if self.overwrite {
            self.current = "0.".to_string();
            self.overwrite = false;
        } else if !self.current.contains('.') {
            self.current.push('.');
        }
    }

    fn choose_operator(&mut self, op: Operator) {
        if self.previous.is_some() && !self.overwrite {
            let result = self.fold();
            self.previous = Some(result.clone());
            self.current = result;
        } else {
            self.previous = Some(self.current.clone());
        }
        self.operator = Some(op);
        self.overwrite = true;
    }

    fn equals(&mut self) {
        if self.operator.is_none() || self.previous.is_none() {
            return;
        }
        self.current = self.fold();
        self.previous = None;
        self.operator = None;
        self.overwrite = true;
    }

    fn fold(&self) -> String {
        evaluate(self.previous.as_deref(), &self.current, self.operator)
    }
}
