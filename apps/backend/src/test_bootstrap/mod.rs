//! Hooks installed before unit tests run.

pub mod logging;
