//! Mock KYC verification service for testing.
//!
//! Wraps a wiremock [`MockServer`] and mounts the routes of the KYC API with
//! caller-chosen responses. Routes that are not mounted answer 404.

use crate::fixtures;
use kyc_contract::Endpoint;
use serde_json::Value;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Priority for mocks that match a specific request body; lower wins.
const SPECIFIC_PRIORITY: u8 = 1;

/// Mock KYC service.
pub struct MockKycService {
    server: MockServer,
}

impl MockKycService {
    /// Start an empty mock service.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Start a mock service where every route behaves correctly.
    ///
    /// The two variance inputs (document numbers `111111111111` and
    /// `999999999999`) score differently, history has two rows and CORS
    /// preflights are answered for `origin`.
    pub async fn healthy(origin: &str) -> Self {
        let service = Self::start().await;
        service.mount_json(Endpoint::Status, 200, fixtures::status_ready()).await;
        service
            .mount_verification(200, fixtures::verification_body("KYC-0001", 18.0))
            .await;
        service
            .mount_verification_for("111111111111", fixtures::verification_body("KYC-0002", 8.5))
            .await;
        service
            .mount_verification_for("999999999999", fixtures::verification_body("KYC-0003", 86.0))
            .await;
        service
            .mount_json(
                Endpoint::History,
                200,
                fixtures::history_rows(&[("John Doe", "Low"), ("Suspicious User", "High")]),
            )
            .await;
        service.mount_cors(origin).await;
        service
    }

    /// Base URL of the mock service.
    #[must_use]
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Underlying wiremock server.
    #[must_use]
    pub const fn server(&self) -> &MockServer {
        &self.server
    }

    /// Answer `endpoint` with a JSON body.
    pub async fn mount_json(&self, endpoint: Endpoint, status: u16, body: Value) {
        Mock::given(method(endpoint.method()))
            .and(path(endpoint.path()))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `endpoint` with a raw text body.
    pub async fn mount_text(&self, endpoint: Endpoint, status: u16, body: &str) {
        Mock::given(method(endpoint.method()))
            .and(path(endpoint.path()))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer every verification request with `body`.
    pub async fn mount_verification(&self, status: u16, body: Value) {
        self.mount_json(Endpoint::VerifyKyc, status, body).await;
    }

    /// Answer verification requests for one document number with `body`.
    ///
    /// Takes precedence over [`Self::mount_verification`].
    pub async fn mount_verification_for(&self, document_number: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path(Endpoint::VerifyKyc.path()))
            .and(body_partial_json(
                serde_json::json!({ "documentNumber": document_number }),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .with_priority(SPECIFIC_PRIORITY)
            .mount(&self.server)
            .await;
    }

    /// Answer CORS preflights from `origin`.
    pub async fn mount_cors(&self, origin: &str) {
        Mock::given(method("OPTIONS"))
            .and(path(Endpoint::VerifyKyc.path()))
            .and(header("Origin", origin))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("access-control-allow-origin", origin)
                    .insert_header("access-control-allow-methods", "GET, POST, OPTIONS"),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer CORS preflights without any CORS headers.
    pub async fn mount_preflight_without_cors(&self) {
        Mock::given(method("OPTIONS"))
            .and(path(Endpoint::VerifyKyc.path()))
            .respond_with(ResponseTemplate::new(405))
            .mount(&self.server)
            .await;
    }

    /// Number of requests received on `path` with `http_method`.
    pub async fn request_count(&self, http_method: &str, request_path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.method.as_str() == http_method && r.url.path() == request_path)
            .count()
    }
}
