//! Domain service for the calculator.

use calculator_sdk::Operation;
use tracing::debug;

use super::error::DomainError;
use crate::config::{CalculatorConfig, OverflowPolicy};

/// Domain service that performs the four arithmetic operations.
///
/// Stateless apart from its configuration; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: CalculatorConfig,
}

impl Service {
    /// Creates a new service with the given configuration.
    #[must_use]
    pub const fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Add two numbers and return the sum.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the sum does not fit in `i32` and the policy is `checked`.
    pub fn add(&self, a: i32, b: i32) -> Result<i32, DomainError> {
        debug!(a, b, "performing addition");
        self.integer_op(Operation::Add, a, b, i32::wrapping_add, i32::checked_add)
    }

    /// Subtract `b` from `a` and return the difference.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the difference does not fit in `i32` and the policy is `checked`.
    pub fn subtract(&self, a: i32, b: i32) -> Result<i32, DomainError> {
        debug!(a, b, "performing subtraction");
        self.integer_op(Operation::Subtract, a, b, i32::wrapping_sub, i32::checked_sub)
    }

    /// Multiply two numbers and return the product.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the product does not fit in `i32` and the policy is `checked`.
    pub fn multiply(&self, a: i32, b: i32) -> Result<i32, DomainError> {
        debug!(a, b, "performing multiplication");
        self.integer_op(Operation::Multiply, a, b, i32::wrapping_mul, i32::checked_mul)
    }

    /// Divide `a` by `b` with floating-point division.
    ///
    /// Both operands convert to `f64` exactly, so the only rounding is in the quotient.
    ///
    /// # Errors
    ///
    /// Returns `DivideByZero` if `b` is zero.
    pub fn divide(&self, a: i32, b: i32) -> Result<f64, DomainError> {
        debug!(a, b, "performing division");
        if b == 0 {
            return Err(DomainError::divide_by_zero(a));
        }
        Ok(f64::from(a) / f64::from(b))
    }

    fn integer_op(
        &self,
        operation: Operation,
        a: i32,
        b: i32,
        wrapping: fn(i32, i32) -> i32,
        checked: fn(i32, i32) -> Option<i32>,
    ) -> Result<i32, DomainError> {
        match self.config.overflow {
            OverflowPolicy::Wrapping => Ok(wrapping(a, b)),
            OverflowPolicy::Checked => {
                checked(a, b).ok_or_else(|| DomainError::overflow(operation, a, b))
            }
        }
    }
}
