//! Validated input events

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Operator};

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, rejecting values above 9
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::invalid_digit(value))
        }
    }

    /// All ten digits in ascending order
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=9).map(Self)
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Character typed into an operand
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

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(ch: char) -> CalcResult<Self> {
        ch.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or_else(|| CalcError::invalid_digit(ch))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One button click, already validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Input {
    /// A digit key
    Digit(Digit),
    /// The decimal point key
    Decimal,
    /// One of the four operator keys
    Operator(Operator),
    /// The clear key
    Clear,
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Input {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}
