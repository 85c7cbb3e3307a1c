//! Line-delimited JSON over TCP. One match per process; every socket feeds
//! the same queue and a single task applies the messages in order.

pub mod connection;
pub mod server;

pub use connection::ClientConnection;
pub use server::{run, serve, MatchEvent, MatchHost};
