//! Calculator core: the click state machine and its arithmetic
//!
//! Everything here is pure. The controller in [`crate::calculator`] owns a
//! [`CalcState`] and forwards display text to a sink.

pub mod input;
pub mod operations;
pub mod state;

pub use input::{Digit, Input};
pub use operations::{evaluate, format_number, parse_operand, Operator};
pub use state::{CalcState, Mode, Transition, INITIAL_OPERAND};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised at the input boundary
///
/// The state machine itself never fails: once an input has been turned into
/// an [`Input`], every transition is total.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Operator identifier outside the closed set
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Digit outside 0-9
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(String),

    /// Click on an element that is not bound to a calculator button
    #[error("Unknown element: {0:?}")]
    UnknownElement(String),

    /// Binding configuration is unusable
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Binding configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl CalcError {
    /// Create an unknown operator error
    #[must_use]
    pub fn unknown_operator(id: impl Into<String>) -> Self {
        Self::UnknownOperator(id.into())
    }

    /// Create an invalid digit error
    #[must_use]
    pub fn invalid_digit(value: impl ToString) -> Self {
        Self::InvalidDigit(value.to_string())
    }

    /// Create an unknown element error
    #[must_use]
    pub fn unknown_element(id: impl Into<String>) -> Self {
        Self::UnknownElement(id.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
