//! Shared proptest generators for the KYC wire types.

use kyc_contract::{DocumentType, VerificationRequest};
use proptest::prelude::*;
use serde_json::{Value, json};

/// Generate fraud probabilities inside the valid range.
pub fn fraud_probability_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(100.0), 0.0f64..=100.0]
}

/// Generate risk level labels as the service spells them.
pub fn risk_level_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Low".to_string()),
        Just("Medium".to_string()),
        Just("High".to_string()),
        Just("Critical".to_string()),
    ]
}

/// Generate known document types.
pub fn document_type_strategy() -> impl Strategy<Value = DocumentType> {
    prop_oneof![
        Just(DocumentType::Aadhar),
        Just(DocumentType::Pan),
        Just(DocumentType::Passport),
        Just(DocumentType::DrivingLicense),
        Just(DocumentType::VoterId),
    ]
}

/// Generate verification requests with plausible field shapes.
pub fn verification_request_strategy() -> impl Strategy<Value = VerificationRequest> {
    (
        "[A-Z][a-z]{2,10} [A-Z][a-z]{2,12}",
        "[0-9]{12}",
        "[0-9]{1,4} [A-Z][a-z]{3,10} Street",
        document_type_strategy(),
    )
        .prop_map(|(name, number, address, document_type)| {
            VerificationRequest::new(name, number, address, document_type)
        })
}

/// Generate complete, contract-valid verification response bodies.
pub fn verification_body_strategy() -> impl Strategy<Value = Value> {
    (
        "[A-Z]{3}-[0-9]{4,8}",
        fraud_probability_strategy(),
        risk_level_strategy(),
        0.0f64..=100.0,
    )
        .prop_map(|(id, fraud_probability, risk_level, confidence)| {
            json!({
                "status": "completed",
                "id": id,
                "fraudProbability": fraud_probability,
                "riskLevel": risk_level,
                "confidence": confidence,
                "message": "generated",
                "details": {}
            })
        })
}

/// Generate history arrays of up to `max` rows.
pub fn history_strategy(max: usize) -> impl Strategy<Value = Value> {
    prop::collection::vec(("[A-Z][a-z]{2,10}", risk_level_strategy()), 0..=max).prop_map(
        |rows| {
            Value::Array(
                rows.into_iter()
                    .map(|(name, risk)| json!({"Name": name, "Fraud_Risk_Level": risk}))
                    .collect(),
            )
        },
    )
}
