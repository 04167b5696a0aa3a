//! Single verification: the response must be complete and in range.

use crate::client::KycClient;
use crate::error::VerifierError;
use crate::outcome::CheckOutcome;
use crate::report::Reporter;
use kyc_contract::{ContractError, VerificationRequest, VerificationResult, display_value};
use serde_json::Value;
use std::io::Write;
use tracing::{info, instrument, warn};

/// Submit one verification and check the response is complete and in range.
///
/// A response that arrives but lacks required fields is a failure of this
/// check only; it never stops the run.
#[instrument(skip_all, fields(name = %request.name))]
pub async fn verify_one<W: Write>(
    client: &KycClient,
    reporter: &mut Reporter<W>,
    request: &VerificationRequest,
) -> CheckOutcome {
    say!(reporter, "📤 Sending request:");
    say!(reporter, "   Name: {}", request.name);
    say!(reporter, "   Document Number: {}", request.document_number);
    say!(reporter, "   Document Type: {}", request.document_type);

    let body = match client.submit_verification(request).await {
        Ok(body) => body,
        Err(VerifierError::UnexpectedStatus { status, body, .. }) => {
            say!(reporter);
            say!(reporter, "❌ API returned status code: {status}");
            say!(reporter, "   Response: {body}");
            return CheckOutcome::failed(format!("status code {status}"));
        }
        Err(err) => {
            warn!(error = %err, "Verification request failed");
            say!(reporter);
            say!(reporter, "❌ API request failed: {err}");
            return CheckOutcome::failed(err.to_string());
        }
    };

    say!(reporter);
    say!(reporter, "✅ API Response Received:");
    say!(reporter, "   Status: {}", field(&body, "status"));
    say!(reporter, "   ID: {}", field(&body, "id"));
    say!(reporter, "   Fraud Probability: {}%", field(&body, "fraudProbability"));
    say!(reporter, "   Risk Level: {}", field(&body, "riskLevel"));
    say!(reporter, "   Confidence: {}%", field(&body, "confidence"));
    say!(reporter, "   Message: {}", field(&body, "message"));

    match VerificationResult::from_value(body) {
        Ok(result) => {
            info!(id = %result.id, fraud_probability = result.fraud_probability, "Verification complete");
            say!(reporter);
            say!(reporter, "✅ All required fields present in response");
            CheckOutcome::Passed
        }
        Err(ContractError::MissingFields(fields)) => {
            warn!(?fields, "Incomplete verification response");
            say!(reporter);
            say!(reporter, "⚠️  Missing fields in response: {fields:?}");
            CheckOutcome::failed(format!("missing fields: {}", fields.join(", ")))
        }
        Err(err) => {
            warn!(error = %err, "Verification response breaks contract");
            say!(reporter);
            say!(reporter, "❌ {err}");
            CheckOutcome::failed(err.to_string())
        }
    }
}

/// Display text of `key` in a response body, `None` when absent.
fn field(body: &Value, key: &str) -> String {
    body.get(key).map_or_else(|| "None".to_string(), display_value)
}
