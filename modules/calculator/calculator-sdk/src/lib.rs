//! Calculator SDK
//!
//! This crate provides the public API for the `calculator` module:
//! - `CalculatorClientV1` trait for inter-module communication
//! - `Operation` model naming the four arithmetic operations
//! - `CalculatorError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::CalculatorClientV1;
//!
//! let client: Arc<dyn CalculatorClientV1> = /* obtained from the host */;
//! let sum = client.add(1, 2).await?;
//! let quotient = client.divide(1, 3).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::CalculatorClientV1;
pub use error::CalculatorError;
pub use models::Operation;
