//! Public error types for the `calculator` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

use crate::models::Operation;

/// Errors that can be returned by the `CalculatorClientV1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The divisor of a division was zero.
    #[error("Division by zero: {dividend} / 0")]
    DivideByZero { dividend: i32 },

    /// The exact result does not fit in `i32` and the overflow policy is `checked`.
    #[error("Integer overflow: {a} {} {b}", .operation.symbol())]
    Overflow {
        operation: Operation,
        a: i32,
        b: i32,
    },
}

impl CalculatorError {
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

    /// Returns `true` if this is a division by zero error.
    #[must_use]
    pub const fn is_divide_by_zero(&self) -> bool {
        matches!(self, Self::DivideByZero { .. })
    }

    /// Returns `true` if this is an overflow error.
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = CalculatorError::divide_by_zero(7);
        assert!(err.is_divide_by_zero());
        assert!(!err.is_overflow());

        let err = CalculatorError::overflow(Operation::Add, i32::MAX, 1);
        assert!(err.is_overflow());
        assert!(!err.is_divide_by_zero());
    }

    #[test]
    fn test_error_display() {
        let err = CalculatorError::divide_by_zero(-2);
        assert_eq!(err.to_string(), "Division by zero: -2 / 0");

        let err = CalculatorError::overflow(Operation::Multiply, 65_536, 65_536);
        assert_eq!(err.to_string(), "Integer overflow: 65536 * 65536");
    }
}
