#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for calculator integration tests

use std::sync::Arc;

use calculator::{CalculatorConfig, CalculatorLocalClient, OverflowPolicy, Service};
use calculator_sdk::CalculatorClientV1;

/// Absolute tolerance for floating-point results.
pub const TOLERANCE: f64 = 0.001;

/// Operands at the edges of the `i32` range, where wrapping and checked behavior diverge.
pub const EDGE_OPERANDS: [i32; 7] = [
    i32::MIN,
    i32::MIN + 1,
    -1,
    0,
    1,
    i32::MAX - 1,
    i32::MAX,
];

pub fn create_service(overflow: OverflowPolicy) -> Arc<Service> {
    Arc::new(Service::new(CalculatorConfig::with_overflow(overflow)))
}

pub fn create_client(overflow: OverflowPolicy) -> Arc<dyn CalculatorClientV1> {
    Arc::new(CalculatorLocalClient::new(create_service(overflow)))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected} (+/- {TOLERANCE}), got {actual}"
    );
}
