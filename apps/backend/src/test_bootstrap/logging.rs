//! Unit tests share the integration-test subscriber so `TEST_LOG` behaves
//! the same under `cargo test --lib` and `cargo test --tests`.

pub use euchre_test_support::logging::{init, init_with_default};
