//! Test fixtures with sample data.
//!
//! Bodies are returned as `serde_json::Value` so tests can break them on
//! purpose before handing them to a mock server.

use kyc_contract::{RecordId, VerificationResult};
use serde_json::{Value, json};

/// Status body with every model loaded.
#[must_use]
pub fn status_ready() -> Value {
    json!({
        "status": "running",
        "models": {
            "fraud_detector": "✅ Loaded",
            "document_classifier": "✅ Loaded"
        }
    })
}

/// Status body where one model failed to load.
#[must_use]
pub fn status_degraded() -> Value {
    json!({
        "status": "running",
        "models": {
            "fraud_detector": "❌ Not loaded",
            "document_classifier": "✅ Loaded"
        }
    })
}

/// A verification result with the given id and fraud score.
#[must_use]
pub fn verification_result(id: &str, fraud_probability: f64) -> VerificationResult {
    let risk_level = match fraud_probability {
        p if p < 30.0 => "Low",
        p if p < 70.0 => "Medium",
        _ => "High",
    };

    VerificationResult {
        status: "completed".to_string(),
        id: RecordId::Text(id.to_string()),
        fraud_probability,
        risk_level: risk_level.to_string(),
        confidence: 91.0,
        message: Some(format!("{risk_level} risk")),
        details: json!({
            "documentFormatValid": true,
            "addressLength": 32
        }),
    }
}

/// JSON body of [`verification_result`].
#[must_use]
pub fn verification_body(id: &str, fraud_probability: f64) -> Value {
    serde_json::to_value(verification_result(id, fraud_probability)).unwrap_or(Value::Null)
}

/// A verification body with `fields` removed.
#[must_use]
pub fn verification_body_without(fields: &[&str]) -> Value {
    let mut body = verification_body("KYC-PARTIAL", 25.0);
    if let Some(map) = body.as_object_mut() {
        for field in fields {
            map.remove(*field);
        }
    }
    body
}

/// History rows in the column naming the service stores them with.
#[must_use]
pub fn history_rows(rows: &[(&str, &str)]) -> Value {
    Value::Array(
        rows.iter()
            .enumerate()
            .map(|(i, (name, risk))| {
                json!({
                    "ID": i + 1,
                    "Name": name,
                    "Document_Type": "AADHAR",
                    "Fraud_Risk_Level": risk
                })
            })
            .collect(),
    )
}
