//! Local client implementing the `CalculatorClientV1` trait.

use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{CalculatorClientV1, CalculatorError, Operation};
use tracing::debug;

use crate::domain::{DomainError, Service};

/// Local client for the Calculator module.
///
/// Implements `CalculatorClientV1` by delegating to the domain service in-process.
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Creates a new local client with the given service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

fn rejected(operation: Operation, e: DomainError) -> CalculatorError {
    debug!(%operation, error = %e, "calculator call rejected");
    e.into()
}

#[async_trait]
impl CalculatorClientV1 for CalculatorLocalClient {
    async fn add(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        self.service
            .add(a, b)
            .map_err(|e| rejected(Operation::Add, e))
    }

    async fn subtract(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        self.service
            .subtract(a, b)
            .map_err(|e| rejected(Operation::Subtract, e))
    }

    async fn multiply(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        self.service
            .multiply(a, b)
            .map_err(|e| rejected(Operation::Multiply, e))
    }

    async fn divide(&self, a: i32, b: i32) -> Result<f64, CalculatorError> {
        self.service
            .divide(a, b)
            .map_err(|e| rejected(Operation::Divide, e))
    }
}
