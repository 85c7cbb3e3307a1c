#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod errors;
pub mod euchre;
pub mod net;
pub mod protocol;
pub mod table;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::ServerConfig;
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use euchre::{build_router, EuchreSetup, MatchContext};
pub use protocol::{InboundMessage, OutboundResult, ServerMsg};
pub use table::{Connection, ConnectionManager, RecordingConnection, Table};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
