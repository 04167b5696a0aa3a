//! History listing and its most recent record.

use crate::client::KycClient;
use crate::outcome::CheckOutcome;
use crate::report::Reporter;
use kyc_contract::latest;
use std::io::Write;
use tracing::{info, instrument, warn};

/// Read the verification history and summarize the latest record.
#[instrument(skip_all)]
pub async fn check_history<W: Write>(client: &KycClient, reporter: &mut Reporter<W>) -> CheckOutcome {
    match client.history().await {
        Ok(records) => {
            info!(records = records.len(), "History read");
            say!(reporter, "✅ History API working");
            say!(reporter, "   Records found: {}", records.len());
            if let Some(record) = latest(&records) {
                say!(reporter, "   Latest record:");
                say!(reporter, "     Name: {}", record.name.as_deref().unwrap_or("None"));
                say!(
                    reporter,
                    "     Risk Level: {}",
                    record.fraud_risk_level.as_deref().unwrap_or("None")
                );
            }
            CheckOutcome::Passed
        }
        Err(err) => {
            if let Some(status) = err.status_code() {
                say!(reporter, "❌ History API returned status code: {status}");
                return CheckOutcome::failed(format!("status code {status}"));
            }
            warn!(error = %err, "History check failed");
            say!(reporter, "❌ History API failed: {err}");
            CheckOutcome::failed(err.to_string())
        }
    }
}
