//! Centralized HTTP client configuration and building.
//!
//! This module provides a standardized way to create HTTP clients and to
//! resolve endpoint paths against a service base URL.

use crate::error::CommonError;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout (default: 30s)
    pub timeout: Duration,
    /// Connection timeout (default: 10s)
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("kyc-platform-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    /// Create a new HTTP config with custom timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a new HTTP config with custom connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Create a new HTTP config with custom user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Build a configured HTTP client.
///
/// Creates a reqwest client with rustls TLS that asks for JSON responses by
/// default.
///
/// # Errors
///
/// Returns an error if the client cannot be built (e.g., TLS initialization fails).
///
/// # Examples
///
/// ```
/// use kyc_common::{HttpConfig, build_http_client};
/// use std::time::Duration;
///
/// let config = HttpConfig::default()
///     .with_timeout(Duration::from_secs(5));
/// let client = build_http_client(&config).expect("Failed to build client");
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, CommonError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(&config.user_agent)
        .default_headers(headers)
        .use_rustls_tls()
        .build()
        .map_err(CommonError::from)
}

/// Parse and normalize a service base URL.
///
/// Only absolute `http` and `https` URLs are accepted. A trailing slash is
/// stripped so endpoint paths can be appended verbatim.
///
/// # Errors
///
/// Returns [`CommonError::InvalidUrl`] if the value is not a URL and
/// [`CommonError::InvalidInput`] for unsupported schemes.
pub fn parse_base_url(raw: &str) -> Result<String, CommonError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommonError::invalid_input("base URL must not be empty"));
    }

    let url = Url::parse(trimmed)?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(CommonError::invalid_input(format!(
                "unsupported URL scheme '{other}', expected http or https"
            )));
        }
    }
    if url.host_str().is_none() {
        return Err(CommonError::invalid_input("base URL has no host"));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Join an endpoint path onto a normalized base URL.
///
/// Exactly one slash separates the two parts regardless of how either side
/// was written.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{path}")
    }
}
