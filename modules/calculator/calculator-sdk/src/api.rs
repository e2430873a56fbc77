//! `CalculatorClientV1` trait definition.
//!
//! This trait defines the public API for the `calculator` module.

use async_trait::async_trait;

use crate::error::CalculatorError;

/// Public API trait for the `calculator` module.
///
/// Consumers hold it as `Arc<dyn CalculatorClientV1>`:
/// ```ignore
/// let quotient = client.divide(9, 3).await?;
/// ```
#[async_trait]
pub trait CalculatorClientV1: Send + Sync {
    /// Add two numbers and return the sum.
    ///
    /// # Errors
    ///
    /// * `Overflow` - If the sum does not fit in `i32` under the `checked` policy
    async fn add(&self, a: i32, b: i32) -> Result<i32, CalculatorError>;

    /// Subtract `b` from `a` and return the difference.
    ///
    /// # Errors
    ///
    /// * `Overflow` - If the difference does not fit in `i32` under the `checked` policy
    async fn subtract(&self, a: i32, b: i32) -> Result<i32, CalculatorError>;

    /// Multiply two numbers and return the product.
    ///
    /// # Errors
    ///
    /// * `Overflow` - If the product does not fit in `i32` under the `checked` policy
    async fn multiply(&self, a: i32, b: i32) -> Result<i32, CalculatorError>;

    /// Divide `a` by `b` using floating-point division.
    ///
    /// The quotient is not truncated: `divide(1, 3)` is `0.333...`.
    ///
    /// # Errors
    ///
    /// * `DivideByZero` - If `b` is zero
    async fn divide(&self, a: i32, b: i32) -> Result<f64, CalculatorError>;
}
