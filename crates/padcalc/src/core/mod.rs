//! Core calculator logic: accumulator, parser, evaluator and formatting
//!
//! Everything in here is UI-independent and free of side effects.

pub mod evaluator;
pub mod format;
mod operations;
pub mod parser;
mod state;

pub use operations::{Digit, Operation};
pub use state::{CalcState, KeypadAction, ERROR_DISPLAY, INITIAL_DISPLAY};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The display text could not be parsed as an arithmetic expression
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
    /// A digit value outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
    /// A character that maps to no keypad button
    #[error("Unknown key: '{0}'")]
    UnknownKey(char),
}

impl CalcError {
    /// Creates an invalid expression error
    #[must_use]
    pub fn invalid_expression(message: impl Into<String>) -> Self {
        Self::InvalidExpression(message.into())
    }
}
