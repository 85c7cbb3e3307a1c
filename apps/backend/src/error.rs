use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Host-level failures: startup, sockets, and the wire.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Protocol error: {0}")]
    Protocol(#[from] serde_json::Error),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Code sent to a client whose message caused this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Io(_) => ErrorCode::Internal,
            AppError::Protocol(_) => ErrorCode::BadRequest,
            AppError::Domain(err) => ErrorCode::from(err),
        }
    }
}
