//! Shared test support for the euchre crates.
//!
//! Integration tests install logging through [`logging::init`] from a
//! `#[ctor::ctor]` hook in `tests/common/mod.rs`.

pub mod logging;
