//! Service status: the one check the rest of the run depends on.

use super::START_HINT;
use crate::client::KycClient;
use crate::error::VerifierResult;
use crate::report::Reporter;
use kyc_contract::ServiceStatus;
use std::io::Write;
use tracing::{error, info, instrument, warn};

/// Confirm the service is up and list model readiness.
///
/// Prints a warning when a model is not loaded, since predictions will then
/// come from fallback scoring; that alone does not fail the check.
///
/// # Errors
///
/// Any transport, status or body error. The caller must stop the run.
#[instrument(skip_all)]
pub async fn check_service_status<W: Write>(
    client: &KycClient,
    reporter: &mut Reporter<W>,
) -> VerifierResult<ServiceStatus> {
    let status = match client.status().await {
        Ok(status) => status,
        Err(err) => {
            if let Some(code) = err.status_code() {
                say!(reporter, "❌ Backend returned status code: {code}");
            } else if err.is_transport() {
                say!(reporter, "❌ Backend is not running: {err}");
                say!(reporter, "   Please start backend: {START_HINT}");
            } else {
                say!(reporter, "❌ Backend returned an unreadable status: {err}");
            }
            error!(error = %err, "Service status check failed");
            return Err(err);
        }
    };

    say!(reporter, "✅ Backend is running");
    say!(reporter, "   Status: {}", status.status);
    say!(reporter, "   Models:");
    for (name, readiness) in &status.models {
        say!(reporter, "     - {name}: {readiness}");
    }

    if !status.all_models_loaded() {
        let unloaded = status.unloaded_models();
        warn!(models = ?unloaded, "Models not loaded");
        say!(reporter);
        say!(reporter, "⚠️  WARNING: Models are not loaded: {}", unloaded.join(", "));
        say!(reporter, "   The API will use fallback/default predictions.");
        say!(reporter, "   Check backend logs for model loading errors.");
    }

    info!(models = status.models.len(), "Service reachable");
    Ok(status)
}
