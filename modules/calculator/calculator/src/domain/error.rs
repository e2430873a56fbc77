//! Domain error types for the Calculator module.

use calculator_sdk::{CalculatorError, Operation};
use thiserror::Error;

/// Domain-level errors for the Calculator module.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The divisor was zero.
    #[error("Division by zero: {dividend} / 0")]
    DivideByZero { dividend: i32 },

    /// The exact result does not fit in `i32`.
    #[error("Integer overflow: {a} {} {b}", .operation.symbol())]
    Overflow {
        operation: Operation,
        a: i32,
        b: i32,
    },
}

impl DomainError {
    /// Creates a `DivideByZero` error.
    #[must_use]
    pub const fn divide_by_zero(dividend: i32) -> Self {
        Self::DivideByZero { dividend }
    }

    /// Creates an `Overflow` error.
    #[must_use]
    pub const fn overflow(operation: Operation, a: i32, b: i32) -> Self {
        Self::Overflow { operation, a, b }
    }
}

impl From<DomainError> for CalculatorError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::DivideByZero { dividend } => CalculatorError::divide_by_zero(dividend),
            DomainError::Overflow { operation, a, b } => {
                CalculatorError::overflow(operation, a, b)
            }
        }
    }
}
