//! Client configuration module
//!
//! Names of the page markers the utilities look for and the server the
//! request helper resolves relative URLs against.

use thiserror::Error;

/// Default server URL (the Flask development server)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Meta element carrying the anti-forgery token
pub const DEFAULT_CSRF_META_NAME: &str = "csrf-token";

/// Request header echoing the anti-forgery token
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

/// Boolean attribute opting a table into click-to-sort
pub const DEFAULT_SORTABLE_ATTRIBUTE: &str = "data-sortable";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL relative request paths are joined onto
    pub base_url: String,
    /// `name` of the `<meta>` element holding the token
    pub csrf_meta_name: String,
    /// Header the token is sent in
    pub csrf_header: String,
    /// Marker attribute on sortable tables
    pub sortable_attribute: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            csrf_meta_name: DEFAULT_CSRF_META_NAME.to_string(),
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
            sortable_attribute: DEFAULT_SORTABLE_ATTRIBUTE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfigBuilder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl(self.base_url.clone()));
        }
        if self.csrf_meta_name.trim().is_empty() {
            return Err(ConfigError::MissingValue("csrf_meta_name"));
        }
        if reqwest::header::HeaderName::from_bytes(self.csrf_header.as_bytes()).is_err() {
            return Err(ConfigError::InvalidHeader(self.csrf_header.clone()));
        }
        if self.sortable_attribute.trim().is_empty() {
            return Err(ConfigError::MissingValue("sortable_attribute"));
        }
        Ok(())
    }
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    csrf_meta_name: Option<String>,
    csrf_header: Option<String>,
    sortable_attribute: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the token meta element name
    pub fn csrf_meta_name(mut self, name: impl Into<String>) -> Self {
        self.csrf_meta_name = Some(name.into());
        self
    }

    /// Set the token header name
    pub fn csrf_header(mut self, header: impl Into<String>) -> Self {
        self.csrf_header = Some(header.into());
        self
    }

    /// Set the sortable marker attribute
    pub fn sortable_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.sortable_attribute = Some(attribute.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let defaults = ClientConfig::default();
        let config = ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            csrf_meta_name: self.csrf_meta_name.unwrap_or(defaults.csrf_meta_name),
            csrf_header: self.csrf_header.unwrap_or(defaults.csrf_header),
            sortable_attribute: self.sortable_attribute.unwrap_or(defaults.sortable_attribute),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid header name: {0}")]
    InvalidHeader(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
