//! Client Error Types
//!
//! This module defines the error type returned by every fallible operation in
//! the crate: reading the anti-forgery token, sending a JSON POST, and sorting
//! a table.
//!
//! # Error Categories
//!
//! - `MissingToken` - the page has no usable `<meta name="csrf-token">`
//! - `SerializationError` - the payload could not be encoded as JSON
//! - `InvalidUrl` - the request target could not be resolved
//! - `InvalidRequest` - the HTTP request could not be assembled
//! - `Network` - the HTTP request failed in transport
//! - `ColumnOutOfRange` - a row is shorter than the clicked column index
//! - `Dom` - a browser DOM call failed (feature `web`)
//! - `InvalidSelector` / `Config` - bad configuration values
//!
//! # Usage
//!
//! ```rust
//! use nativeform_client::shared::error::ClientError;
//!
//! let error = ClientError::missing_token("csrf-token");
//! assert!(error.to_string().contains("csrf-token"));
//! ```
use thiserror::Error;

/// Errors raised by the request helper and the table sorter
#[derive(Debug, Error)]
pub enum ClientError {
    /// The page carries no anti-forgery token
    #[error("Missing anti-forgery token: no <meta name=\"{meta_name}\"> with a content attribute")]
    MissingToken {
        /// Name of the meta element that was looked up
        meta_name: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Request URL could not be parsed or joined onto the base URL
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The URL as given by the caller
        url: String,
        /// Human-readable error message
        message: String,
    },

    /// The HTTP request could not be assembled
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Human-readable error message
        message: String,
    },

    /// Transport-level failure while sending a request
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A row does not have a cell at the requested column
    #[error("Column {column} out of range for row {row} ({cells} cells)")]
    ColumnOutOfRange {
        /// Zero-based body row position
        row: usize,
        /// Requested column index
        column: usize,
        /// Number of cells the row actually has
        cells: usize,
    },

    /// A CSS selector built from configuration failed to parse
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector {
        /// The selector text
        selector: String,
        /// Human-readable error message
        message: String,
    },

    /// A browser DOM call failed
    #[error("DOM error: {message}")]
    Dom {
        /// Human-readable error message
        message: String,
    },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] crate::shared::config::ConfigError),
}

impl ClientError {
    /// Create a new missing-token error
    pub fn missing_token(meta_name: impl Into<String>) -> Self {
        Self::MissingToken {
            meta_name: meta_name.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new invalid URL error
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a new invalid selector error
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Create a new DOM error
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }

    /// Whether the failure happened before anything was sent
    pub fn is_pre_flight(&self) -> bool {
        !matches!(self, Self::Network(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
