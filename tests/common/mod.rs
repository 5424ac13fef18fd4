//! Common test utilities and helpers
//!
//! - Tracing setup for test output
//! - HTML page fixtures

pub mod pages;

pub use pages::*;

use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber; `RUST_LOG` controls verbosity
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
