//! CSRF-aware JSON POST helper
//!
//! Every state-changing request the Native-Form pages make goes through
//! [`ApiClient::api_post`]: the anti-forgery token is read from the page at
//! call time and echoed back in a request header alongside a JSON body.
//!
//! ```rust,no_run
//! use nativeform_client::page::HtmlPage;
//! use nativeform_client::request::ApiClient;
//! use nativeform_client::shared::ClientConfig;
//! use serde_json::json;
//!
//! # async fn example(html: &str) -> Result<(), nativeform_client::shared::ClientError> {
//! let page = HtmlPage::parse(html);
//! let client = ApiClient::new(ClientConfig::default());
//! let response = client
//!     .api_post(&page, "/cloud/discover", &json!({ "connection_id": 3 }))
//!     .await?;
//! println!("status: {}", response.status());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::future::Future;

use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Request, Response, Url};
use serde::Serialize;

use crate::page::PageMeta;
use crate::shared::config::{ClientConfig, ConfigError};
use crate::shared::error::ClientError;

/// Anti-forgery token read from the current page
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Read the token from `page`, failing if the meta element is absent
    pub fn from_page<P>(page: &P, meta_name: &str) -> Result<Self, ClientError>
    where
        P: PageMeta + ?Sized,
    {
        match page.meta_content(meta_name) {
            Some(value) => Ok(Self(value)),
            None => {
                tracing::warn!(meta_name, "Anti-forgery token not found in page");
                Err(ClientError::missing_token(meta_name))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens stay out of logs.
impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CsrfToken").field(&"<redacted>").finish()
    }
}

/// HTTP client for the Native-Form JSON endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    client: Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Use an existing `reqwest::Client` (shared pool, custom timeouts)
    pub fn with_client(config: ClientConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve `url` against the configured base URL.
    ///
    /// Absolute URLs are returned unchanged.
    pub fn resolve_url(&self, url: &str) -> Result<Url, ClientError> {
        let base = Url::parse(&self.config.base_url)
            .map_err(|e| ClientError::invalid_url(&self.config.base_url, e.to_string()))?;
        base.join(url)
            .map_err(|e| ClientError::invalid_url(url, e.to_string()))
    }

    /// Build the POST request without sending it.
    ///
    /// The token is read before anything else, so a page without one fails
    /// here and no request is ever constructed.
    pub fn build_post<P, T>(&self, page: &P, url: &str, data: &T) -> Result<Request, ClientError>
    where
        P: PageMeta + ?Sized,
        T: Serialize + ?Sized,
    {
        let token = CsrfToken::from_page(page, &self.config.csrf_meta_name)?;
        let body = serde_json::to_vec(data)?;
        let target = self.resolve_url(url)?;

        let header_name =
            HeaderName::from_bytes(self.config.csrf_header.as_bytes()).map_err(|e| {
                ConfigError::InvalidHeader(format!("{}: {}", self.config.csrf_header, e))
            })?;
        let header_value = HeaderValue::from_str(token.as_str())
            .map_err(|_| ClientError::missing_token(&self.config.csrf_meta_name))?;

        let request = self
            .client
            .post(target)
            .header(CONTENT_TYPE, "application/json")
            .header(header_name, header_value)
            .body(body)
            .build()
            .map_err(|e| ClientError::invalid_request(e.to_string()))?;
        Ok(request)
    }

    /// Send a CSRF-protected JSON POST to `url`.
    ///
    /// The request is built when this is called, so a page without a token
    /// fails before anything is sent. The returned future holds only the
    /// client and the built request, not the page.
    ///
    /// The response is returned as-is: non-success statuses are not errors
    /// here, only transport failures are.
    pub fn api_post<P, T>(
        &self,
        page: &P,
        url: &str,
        data: &T,
    ) -> impl Future<Output = Result<Response, ClientError>>
    where
        P: PageMeta + ?Sized,
        T: Serialize + ?Sized,
    {
        let prepared = self.build_post(page, url, data);
        let client = self.client.clone();

        async move {
            let request = prepared?;
            tracing::debug!(method = "POST", url = %request.url(), "Sending JSON request");

            let response = client.execute(request).await?;
            tracing::debug!(status = %response.status(), "Received response");
            Ok::<_, ClientError>(response)
        }
    }
}
