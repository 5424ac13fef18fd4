//! Shared Module
//!
//! Configuration and error types used by both the request helper and the
//! table sorter.

/// Client error types
pub mod error;

/// Client configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{ClientConfig, ClientConfigBuilder, ConfigError};
pub use error::ClientError;
