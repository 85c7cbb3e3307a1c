//! Error handling for the euchre engine.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, SeatingKind, ValidationKind};
pub use error_code::ErrorCode;
