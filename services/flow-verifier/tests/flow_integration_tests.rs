//! End-to-end runs of the flow verifier against a mock KYC service.

use kyc_contract::Endpoint;
use kyc_flow_verifier::{Check, CheckOutcome, Config, FlowVerifier, Reporter, RunReport};
use std::time::Duration;
use test_utils::MockKycService;
use test_utils::fixtures;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORIGIN: &str = "http://localhost:5173";

async fn run_against(uri: &str, allow_warnings: bool) -> (RunReport, String) {
    let config = Config::for_base_url(uri)
        .unwrap()
        .with_origin(ORIGIN)
        .with_allow_warnings(allow_warnings)
        .with_timeout(Duration::from_secs(5));
    let verifier = FlowVerifier::new(&config).unwrap();

    let mut reporter = Reporter::new(Vec::new());
    let report = verifier.run(&mut reporter).await;
    let output = String::from_utf8(reporter.finish().unwrap()).unwrap();
    (report, output)
}

/// Service with working status, history and CORS but no verification routes.
async fn service_without_verification() -> MockKycService {
    let service = MockKycService::start().await;
    service
        .mount_json(Endpoint::Status, 200, fixtures::status_ready())
        .await;
    service
        .mount_json(
            Endpoint::History,
            200,
            fixtures::history_rows(&[("John Doe", "Low")]),
        )
        .await;
    service.mount_cors(ORIGIN).await;
    service
}

// ============================================================================
// Full runs
// ============================================================================

#[tokio::test]
async fn test_healthy_service_passes_every_check() {
    let service = MockKycService::healthy(ORIGIN).await;
    let (report, output) = run_against(&service.uri(), false).await;

    assert!(!report.aborted);
    assert_eq!(report.summary.entries().len(), 5);
    for (check, outcome) in report.summary.entries() {
        assert_eq!(outcome, &CheckOutcome::Passed, "{check} did not pass");
    }
    assert_eq!(report.exit_code(), 0);

    assert!(output.contains("COMPLETE FLOW VERIFICATION TEST"));
    assert!(output.contains("✅ Backend is running"));
    assert!(output.contains("✅ All required fields present in response"));
    assert!(output.contains("Prediction 1: 8.5%"));
    assert!(output.contains("Prediction 2: 86%"));
    assert!(output.contains("Records found: 2"));
    assert!(output.contains("Name: Suspicious User"));
    assert!(output.contains("Allow Origin: http://localhost:5173"));
    assert!(output.contains("✅ ALL TESTS PASSED"));
}

#[tokio::test]
async fn test_checks_run_in_fixed_order() {
    let service = MockKycService::healthy(ORIGIN).await;
    let (report, output) = run_against(&service.uri(), false).await;

    let order: Vec<Check> = report.summary.entries().iter().map(|(c, _)| *c).collect();
    assert_eq!(order, Check::ALL.to_vec());

    let positions: Vec<usize> = Check::ALL
        .iter()
        .map(|check| output.find(check.title()).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_each_endpoint_called_as_expected() {
    let service = MockKycService::healthy(ORIGIN).await;
    run_against(&service.uri(), false).await;

    assert_eq!(service.request_count("GET", "/").await, 1);
    assert_eq!(service.request_count("POST", "/api/verify-kyc").await, 3);
    assert_eq!(service.request_count("GET", "/api/history").await, 1);
    assert_eq!(service.request_count("OPTIONS", "/api/verify-kyc").await, 1);
}

// ============================================================================
// Fatal status check
// ============================================================================

#[tokio::test]
async fn test_unreachable_service_aborts() {
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let (report, output) = run_against(&uri, true).await;

    assert!(report.aborted);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.summary.entries().len(), 1);
    assert!(matches!(
        report.summary.outcome(Check::ServiceStatus),
        Some(CheckOutcome::Failed(_))
    ));
    assert!(output.contains("❌ Backend is not running"));
    assert!(output.contains("uvicorn main:app --reload"));
    assert!(!output.contains(Check::Verification.title()));
    assert!(!output.contains("TEST SUMMARY"));
}

#[tokio::test]
async fn test_status_error_code_aborts() {
    let service = MockKycService::start().await;
    service
        .mount_text(Endpoint::Status, 503, "starting up")
        .await;

    let (report, output) = run_against(&service.uri(), false).await;

    assert!(report.aborted);
    assert_eq!(report.exit_code(), 1);
    assert!(output.contains("❌ Backend returned status code: 503"));
    assert_eq!(service.request_count("POST", "/api/verify-kyc").await, 0);
}

#[tokio::test]
async fn test_status_other_success_code_aborts() {
    let service = MockKycService::start().await;
    service
        .mount_json(Endpoint::Status, 201, fixtures::status_ready())
        .await;

    let (report, _) = run_against(&service.uri(), false).await;
    assert!(report.aborted);
}

#[tokio::test]
async fn test_status_without_status_key_aborts() {
    let service = MockKycService::start().await;
    service
        .mount_json(
            Endpoint::Status,
            200,
            serde_json::json!({"models": {"fraud_detector": "Loaded"}}),
        )
        .await;

    let (report, output) = run_against(&service.uri(), false).await;
    assert!(report.aborted);
    assert!(output.contains("unreadable status"));
}

#[tokio::test]
async fn test_status_not_json_aborts() {
    let service = MockKycService::start().await;
    service.mount_text(Endpoint::Status, 200, "OK").await;

    let (report, _) = run_against(&service.uri(), false).await;
    assert!(report.aborted);
    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn test_unloaded_models_warn_but_pass() {
    let service = MockKycService::start().await;
    service
        .mount_json(Endpoint::Status, 200, fixtures::status_degraded())
        .await;

    let (report, output) = run_against(&service.uri(), false).await;

    assert!(!report.aborted);
    assert_eq!(
        report.summary.outcome(Check::ServiceStatus),
        Some(&CheckOutcome::Passed)
    );
    assert!(output.contains("⚠️  WARNING: Models are not loaded: fraud_detector"));
    assert!(output.contains("fallback/default predictions"));
}

// ============================================================================
// Non-fatal checks
// ============================================================================

#[tokio::test]
async fn test_incomplete_verification_fails_but_run_continues() {
    let service = service_without_verification().await;
    service
        .mount_verification(200, fixtures::verification_body_without(&["id", "details"]))
        .await;

    let (report, output) = run_against(&service.uri(), false).await;

    assert!(!report.aborted);
    assert_eq!(
        report.summary.outcome(Check::Verification),
        Some(&CheckOutcome::failed("missing fields: id, details"))
    );
    assert_eq!(
        report.summary.outcome(Check::History),
        Some(&CheckOutcome::Passed)
    );
    assert_eq!(report.summary.outcome(Check::Cors), Some(&CheckOutcome::Passed));
    assert!(output.contains("⚠️  Missing fields in response: [\"id\", \"details\"]"));
    assert!(output.contains("ID: None"));
    assert!(output.contains("❌ FAIL: API Verification"));
    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn test_out_of_range_score_fails_verification() {
    let service = service_without_verification().await;
    let mut body = fixtures::verification_body("KYC-9", 10.0);
    body["fraudProbability"] = serde_json::json!(140);
    service.mount_verification(200, body).await;

    let (report, output) = run_against(&service.uri(), true).await;

    assert!(matches!(
        report.summary.outcome(Check::Verification),
        Some(CheckOutcome::Failed(reason)) if reason.contains("outside [0, 100]")
    ));
    assert!(output.contains("fraudProbability 140 outside [0, 100]"));
}

#[tokio::test]
async fn test_verification_error_status_echoes_body() {
    let service = service_without_verification().await;
    service
        .mount_text(Endpoint::VerifyKyc, 422, r#"{"detail":"documentNumber invalid"}"#)
        .await;

    let (report, output) = run_against(&service.uri(), false).await;

    assert_eq!(
        report.summary.outcome(Check::Verification),
        Some(&CheckOutcome::failed("status code 422"))
    );
    assert!(output.contains("❌ API returned status code: 422"));
    assert!(output.contains(r#"Response: {"detail":"documentNumber invalid"}"#));
    assert!(matches!(
        report.summary.outcome(Check::PredictionVariance),
        Some(CheckOutcome::Failed(_))
    ));
}

#[tokio::test]
async fn test_identical_predictions_warn() {
    let service = service_without_verification().await;
    service
        .mount_verification(200, fixtures::verification_body("KYC-FALLBACK", 50.0))
        .await;

    let (report, output) = run_against(&service.uri(), false).await;

    assert!(matches!(
        report.summary.outcome(Check::PredictionVariance),
        Some(CheckOutcome::Warned(_))
    ));
    assert!(output.contains("⚠️  Model returned same predictions"));
    assert!(output.contains("Both predictions: 50%"));
    assert_eq!(report.exit_code(), 1);

    let (report, _) = run_against(&service.uri(), true).await;
    assert_eq!(report.exit_code(), 0);
}

#[tokio::test]
async fn test_variance_with_one_failed_case_fails() {
    let service = service_without_verification().await;
    service
        .mount_verification(200, fixtures::verification_body("KYC-1", 20.0))
        .await;
    Mock::given(method("POST"))
        .and(path("/api/verify-kyc"))
        .and(body_partial_json(serde_json::json!({"documentNumber": "999999999999"})))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(service.server())
        .await;

    let (report, output) = run_against(&service.uri(), true).await;

    assert_eq!(
        report.summary.outcome(Check::PredictionVariance),
        Some(&CheckOutcome::failed("only 1 of 2 cases scored"))
    );
    assert!(output.contains("❌ Failed: 500"));
    assert!(output.contains("❌ Could not complete model prediction test"));
}

#[tokio::test]
async fn test_empty_history_passes_without_latest_record() {
    let service = MockKycService::start().await;
    service
        .mount_json(Endpoint::Status, 200, fixtures::status_ready())
        .await;
    service
        .mount_verification(200, fixtures::verification_body("KYC-1", 20.0))
        .await;
    service
        .mount_json(Endpoint::History, 200, serde_json::json!([]))
        .await;
    service.mount_cors(ORIGIN).await;

    let (report, output) = run_against(&service.uri(), true).await;

    assert_eq!(
        report.summary.outcome(Check::History),
        Some(&CheckOutcome::Passed)
    );
    assert!(output.contains("Records found: 0"));
    assert!(!output.contains("Latest record"));
}

#[tokio::test]
async fn test_history_error_fails_but_cors_still_runs() {
    let service = MockKycService::start().await;
    service
        .mount_json(Endpoint::Status, 200, fixtures::status_ready())
        .await;
    service
        .mount_verification(200, fixtures::verification_body("KYC-1", 20.0))
        .await;
    service
        .mount_text(Endpoint::History, 500, "Internal Server Error")
        .await;
    service.mount_cors(ORIGIN).await;

    let (report, output) = run_against(&service.uri(), true).await;

    assert_eq!(
        report.summary.outcome(Check::History),
        Some(&CheckOutcome::failed("status code 500"))
    );
    assert_eq!(report.summary.outcome(Check::Cors), Some(&CheckOutcome::Passed));
    assert!(output.contains("❌ History API returned status code: 500"));
}

#[tokio::test]
async fn test_history_not_a_list_fails() {
    let service = MockKycService::start().await;
    service
        .mount_json(Endpoint::Status, 200, fixtures::status_ready())
        .await;
    service
        .mount_json(Endpoint::History, 200, serde_json::json!({"records": []}))
        .await;

    let (report, _) = run_against(&service.uri(), true).await;

    assert!(matches!(
        report.summary.outcome(Check::History),
        Some(CheckOutcome::Failed(reason)) if reason.contains("malformed JSON")
    ));
}

#[tokio::test]
async fn test_missing_cors_headers_warn() {
    let service = MockKycService::healthy("http://other-origin.example.com").await;
    service.mount_preflight_without_cors().await;

    let (report, output) = run_against(&service.uri(), false).await;

    assert_eq!(
        report.summary.outcome(Check::Cors),
        Some(&CheckOutcome::warned("CORS headers not found"))
    );
    assert!(output.contains("⚠️  CORS headers not found"));
    assert!(output.contains("⚠️  WARN: CORS"));
    assert_eq!(report.exit_code(), 1);

    let (report, output) = run_against(&service.uri(), true).await;
    assert_eq!(report.exit_code(), 0);
    assert!(output.contains("✅ ALL TESTS PASSED"));
}

#[tokio::test]
async fn test_out_of_range_variance_scores_fail() {
    let service = service_without_verification().await;
    service
        .mount_verification(200, fixtures::verification_body("KYC-1", 20.0))
        .await;
    let mut high = fixtures::verification_body("KYC-2", 10.0);
    high["fraudProbability"] = serde_json::json!(500);
    service.mount_verification_for("111111111111", high).await;
    let mut low = fixtures::verification_body("KYC-3", 10.0);
    low["fraudProbability"] = serde_json::json!(-300);
    service.mount_verification_for("999999999999", low).await;

    let (report, output) = run_against(&service.uri(), true).await;

    assert_eq!(
        report.summary.outcome(Check::Verification),
        Some(&CheckOutcome::Passed)
    );
    assert_eq!(
        report.summary.outcome(Check::PredictionVariance),
        Some(&CheckOutcome::failed("only 0 of 2 cases scored"))
    );
    assert!(output.contains("❌ Error: Invalid response: fraudProbability 500 outside [0, 100]"));
    assert!(output.contains("❌ Error: Invalid response: fraudProbability -300 outside [0, 100]"));
    assert!(!output.contains("Model is making different predictions"));
    assert_eq!(report.exit_code(), 1);
}

// ============================================================================
// Interruption
// ============================================================================

async fn run_until_against<F>(uri: &str, cancel: F) -> (u8, String)
where
    F: std::future::Future<Output = ()>,
{
    let config = Config::for_base_url(uri).unwrap().with_origin(ORIGIN);
    let verifier = FlowVerifier::new(&config).unwrap();

    let mut reporter = Reporter::new(Vec::new());
    let code = verifier.run_until(&mut reporter, cancel).await;
    let output = String::from_utf8(reporter.finish().unwrap()).unwrap();
    (code, output)
}

#[tokio::test]
async fn test_cancel_before_start_reports_interruption() {
    let service = MockKycService::healthy(ORIGIN).await;

    let (code, output) = run_until_against(&service.uri(), std::future::ready(())).await;

    assert_eq!(code, 1);
    assert!(output.ends_with("\n\nTest interrupted by user\n"));
    assert!(!output.contains("TEST SUMMARY"));
    assert_eq!(service.request_count("GET", "/").await, 0);
}

#[tokio::test]
async fn test_cancel_mid_run_stops_without_summary() {
    let service = MockKycService::start().await;
    service
        .mount_json(Endpoint::Status, 200, fixtures::status_ready())
        .await;
    Mock::given(method("POST"))
        .and(path("/api/verify-kyc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::verification_body("KYC-SLOW", 40.0))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(service.server())
        .await;

    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let cancel = async move {
        let _ = rx.await;
    };
    let trigger = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        let _ = tx.send(());
    });

    let (code, output) = run_until_against(&service.uri(), cancel).await;
    trigger.await.unwrap();

    assert_eq!(code, 1);
    assert!(output.contains("✅ Backend is running"));
    assert!(output.contains(Check::Verification.title()));
    assert!(!output.contains("✅ API Response Received"));
    assert!(!output.contains(Check::History.title()));
    assert!(!output.contains("TEST SUMMARY"));
    assert!(output.contains("Test interrupted by user"));
    assert_eq!(service.request_count("GET", "/api/history").await, 0);
}

#[tokio::test]
async fn test_uncancelled_run_returns_verdict() {
    let service = MockKycService::healthy(ORIGIN).await;

    let (code, output) = run_until_against(&service.uri(), std::future::pending()).await;

    assert_eq!(code, 0);
    assert!(output.contains("✅ ALL TESTS PASSED"));
    assert!(!output.contains("interrupted"));
}
