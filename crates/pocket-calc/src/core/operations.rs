//! Operators and the evaluation policy
//!
//! Operands travel as the text the user typed. Evaluation parses both sides
//! as `f64`, applies the operator and formats the result back to text. No
//! rounding is applied: `0.1 + 0.2` shows `0.30000000000000004` and `1 / 0`
//! shows `Infinity`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// The closed set of calculator operators
///
/// The button identifiers (`add-equals`, `sub`, `mult`, `div`) are the serde
/// and [`FromStr`] representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition, doubling as the equals key
    #[serde(rename = "add-equals")]
    AddEquals,
    /// Subtraction
    #[serde(rename = "sub")]
    Subtract,
    /// Multiplication
    #[serde(rename = "mult")]
    Multiply,
    /// Division
    #[serde(rename = "div")]
    Divide,
}

impl Operator {
    /// Every operator, in keypad order
    pub const ALL: [Self; 4] = [Self::AddEquals, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the button identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::AddEquals => "add-equals",
            Self::Subtract => "sub",
            Self::Multiply => "mult",
            Self::Divide => "div",
        }
    }

    /// Returns the button label
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::AddEquals => "+/=",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operator with IEEE semantics
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::AddEquals => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }

    /// True for the operator that parks the machine on its result
    #[must_use]
    pub const fn is_equals(self) -> bool {
        matches!(self, Self::AddEquals)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.id() == s)
            .ok_or_else(|| {
                tracing::error!(operator = s, "rejected operator outside the closed set");
                CalcError::unknown_operator(s)
            })
    }
}

/// Evaluates `a op b` and returns the formatted result
#[must_use]
pub fn evaluate(a: &str, op: Operator, b: &str) -> String {
    let value = op.apply(parse_operand(a), parse_operand(b));
    format_number(value)
}

/// Parses operand text as a number
///
/// Empty text is `0`. Text that is not a number (a lone `"."`) is NaN.
/// Earlier results such as `"Infinity"` or `"1e+21"` parse back to the
/// same value.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a number for the display panel
///
/// Plain notation in `[1e-6, 1e21)`, signed exponent notation outside it.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    // also catches -0
    if value == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
