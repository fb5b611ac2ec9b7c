//! Core calculator logic, independent of the terminal frontend.

pub mod evaluator;
pub mod fraction;
pub mod history;
mod operations;
pub mod parser;
pub mod session;

pub use operations::{Calculator, Operator};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid result (NaN or other)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}
