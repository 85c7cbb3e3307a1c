//! Wire shapes exchanged with clients.

pub mod messages;

pub use messages::{InboundMessage, OutboundResult, ServerMsg};
