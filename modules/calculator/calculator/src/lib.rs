//! Calculator Module
//!
//! Four-function integer arithmetic exposed through the `calculator-sdk` contract.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic
//! - `domain/error.rs` - Domain errors and their mapping to `CalculatorError`
//! - `local_client.rs` - `CalculatorClientV1` implementation over the domain service
//! - `config.rs` - Module configuration (overflow policy)

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod domain;
pub mod local_client;

pub use config::{CalculatorConfig, OverflowPolicy};
pub use domain::Service;
pub use local_client::CalculatorLocalClient;
