//! Prediction variance: contrasting applicants must not score the same.

use crate::client::KycClient;
use crate::outcome::CheckOutcome;
use crate::report::Reporter;
use kyc_contract::{VerificationRequest, VerificationResult};
use std::io::Write;
use tracing::{debug, instrument, warn};

/// Score contrasting applicants and check the scores differ.
///
/// Identical scores are a warning: the service answered, but probably from a
/// fallback rather than a loaded model.
#[instrument(skip_all, fields(cases = cases.len()))]
pub async fn check_prediction_variance<W: Write>(
    client: &KycClient,
    reporter: &mut Reporter<W>,
    cases: &[VerificationRequest],
) -> CheckOutcome {
    let mut results: Vec<VerificationResult> = Vec::with_capacity(cases.len());

    for (i, request) in cases.iter().enumerate() {
        say!(reporter);
        say!(reporter, "   Test Case {}: {}", i + 1, request.name);

        match client.verify(request).await {
            Ok(result) => {
                debug!(case = i + 1, probability = result.fraud_probability, "Case scored");
                say!(reporter, "     Fraud Probability: {}%", result.fraud_probability);
                say!(reporter, "     Risk Level: {}", result.risk_level);
                results.push(result);
            }
            Err(err) => {
                warn!(case = i + 1, error = %err, "Case not scored");
                match err.status_code() {
                    Some(status) => say!(reporter, "     ❌ Failed: {status}"),
                    None => say!(reporter, "     ❌ Error: {err}"),
                }
            }
        }
    }

    let [first, second, ..] = &results[..] else {
        say!(reporter);
        say!(reporter, "❌ Could not complete model prediction test");
        return CheckOutcome::failed(format!(
            "only {} of {} cases scored",
            results.len(),
            cases.len()
        ));
    };

    say!(reporter);
    if first.score_differs_from(second) {
        say!(reporter, "✅ Model is making different predictions (Model is working!)");
        say!(reporter, "   Prediction 1: {}%", first.fraud_probability);
        say!(reporter, "   Prediction 2: {}%", second.fraud_probability);
        CheckOutcome::Passed
    } else {
        let probability = first.fraud_probability;
        warn!(probability, "Identical predictions for contrasting inputs");
        say!(reporter, "⚠️  Model returned same predictions (might be using fallback)");
        say!(reporter, "   Both predictions: {probability}%");
        CheckOutcome::warned(format!("identical fraud probability {probability}%"))
    }
}
