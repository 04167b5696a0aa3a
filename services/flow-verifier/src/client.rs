//! HTTP client for the KYC verification API.

use crate::config::Config;
use crate::error::{VerifierError, VerifierResult};
use kyc_common::{build_http_client, join_url};
use kyc_contract::{Endpoint, HistoryRecord, ServiceStatus, VerificationRequest, VerificationResult};
use reqwest::header::{
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD,
    HeaderMap, HeaderName, ORIGIN,
};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// CORS headers returned on a preflight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsHeaders {
    /// HTTP status of the preflight response
    pub status: u16,
    /// `access-control-allow-origin`
    pub allow_origin: Option<String>,
    /// `access-control-allow-methods`
    pub allow_methods: Option<String>,
}

impl CorsHeaders {
    fn from_headers(status: StatusCode, headers: &HeaderMap) -> Self {
        let text = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        Self {
            status: status.as_u16(),
            allow_origin: text(ACCESS_CONTROL_ALLOW_ORIGIN),
            allow_methods: text(ACCESS_CONTROL_ALLOW_METHODS),
        }
    }
}

/// KYC verification API client.
///
/// Every call is a single request; nothing is retried.
#[derive(Debug, Clone)]
pub struct KycClient {
    http: Client,
    base_url: String,
}

impl KycClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> VerifierResult<Self> {
        let http = build_http_client(&config.http)?;
        Ok(Self::with_http_client(http, config.base_url.clone()))
    }

    /// Create a client around an existing reqwest client.
    #[must_use]
    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Service base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `endpoint`.
    #[must_use]
    pub fn url(&self, endpoint: Endpoint) -> String {
        join_url(&self.base_url, endpoint.path())
    }

    /// `GET /`.
    ///
    /// # Errors
    ///
    /// Transport failure, a status other than 200, or a body without a
    /// string `status` field.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn status(&self) -> VerifierResult<ServiceStatus> {
        let body = self.call(Endpoint::Status, |rb| rb).await?;
        decode(Endpoint::Status, body)
    }

    /// `POST /api/verify-kyc`, returning the raw JSON body.
    ///
    /// The body is not checked against the result contract so callers can
    /// still show what an incomplete response contained.
    ///
    /// # Errors
    ///
    /// Transport failure, a status other than 200, or a body that is not JSON.
    #[instrument(skip(self, request), fields(document_type = %request.document_type))]
    pub async fn submit_verification(&self, request: &VerificationRequest) -> VerifierResult<Value> {
        self.call(Endpoint::VerifyKyc, |rb| rb.json(request)).await
    }

    /// `POST /api/verify-kyc`, decoded and validated.
    ///
    /// # Errors
    ///
    /// Everything [`Self::submit_verification`] returns, plus
    /// [`VerifierError::Contract`] when the body breaks the result contract.
    pub async fn verify(&self, request: &VerificationRequest) -> VerifierResult<VerificationResult> {
        let body = self.submit_verification(request).await?;
        Ok(VerificationResult::from_value(body)?)
    }

    /// `GET /api/history`.
    ///
    /// # Errors
    ///
    /// Transport failure, a status other than 200, or a body that is not a
    /// JSON array of records.
    #[instrument(skip(self))]
    pub async fn history(&self) -> VerifierResult<Vec<HistoryRecord>> {
        let body = self.call(Endpoint::History, |rb| rb).await?;
        decode(Endpoint::History, body)
    }

    /// `OPTIONS /api/verify-kyc` as a browser would send before a `POST`.
    ///
    /// Any response status is accepted; only the headers matter.
    ///
    /// # Errors
    ///
    /// Transport failure only.
    #[instrument(skip(self))]
    pub async fn preflight(&self, origin: &str) -> VerifierResult<CorsHeaders> {
        let endpoint = Endpoint::VerifyKyc;
        let url = self.url(endpoint);
        debug!(%url, origin, "Sending CORS preflight");

        let response = self
            .http
            .request(Method::OPTIONS, &url)
            .header(ORIGIN, origin)
            .header(ACCESS_CONTROL_REQUEST_METHOD, endpoint.method())
            .send()
            .await
            .map_err(|source| VerifierError::Transport { endpoint, source })?;

        let cors = CorsHeaders::from_headers(response.status(), response.headers());
        debug!(status = cors.status, allow_origin = ?cors.allow_origin, "Preflight answered");
        Ok(cors)
    }

    async fn call<F>(&self, endpoint: Endpoint, build: F) -> VerifierResult<Value>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url(endpoint);
        let method = http_method(endpoint);
        debug!(%method, %url, "Sending request");

        let response = build(self.http.request(method, &url))
            .send()
            .await
            .map_err(|source| VerifierError::Transport { endpoint, source })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| VerifierError::Transport { endpoint, source })?;
        debug!(status = status.as_u16(), bytes = text.len(), "Response received");

        if status != StatusCode::OK {
            warn!(%endpoint, status = status.as_u16(), "Unexpected status");
            return Err(VerifierError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| VerifierError::malformed(endpoint, e))
    }
}

fn http_method(endpoint: Endpoint) -> Method {
    match endpoint {
        Endpoint::Status | Endpoint::History => Method::GET,
        Endpoint::VerifyKyc => Method::POST,
    }
}

fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: Value) -> VerifierResult<T> {
    serde_json::from_value(body).map_err(|e| VerifierError::malformed(endpoint, e))
}
