//! Domain layer for the calculator module.

pub mod error;
pub mod service;

pub use error::DomainError;
pub use service::Service;
