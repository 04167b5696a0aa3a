//! Verification result returned by `POST /api/verify-kyc`.

use crate::error::ContractError;
use crate::scalar;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::RangeInclusive;

/// Keys every verification response must carry.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "status",
    "id",
    "fraudProbability",
    "riskLevel",
    "confidence",
    "details",
];

/// Valid range for percentage scores.
pub const SCORE_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Identifier assigned by the service to a verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric identifier
    Number(serde_json::Number),
    /// Textual identifier
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A fraud-scored verification outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Verification status label
    pub status: String,
    /// Service-assigned identifier
    pub id: RecordId,
    /// Likelihood of fraud, in percent
    pub fraud_probability: f64,
    /// Risk bucket derived from the fraud probability
    pub risk_level: String,
    /// Model confidence, in percent
    pub confidence: f64,
    /// Human-readable summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Per-check breakdown; shape is service-defined
    pub details: Value,
}

/// Required keys absent from a response object, in contract order.
#[must_use]
pub fn missing_fields(body: &Map<String, Value>) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !body.contains_key(*field))
        .collect()
}

impl VerificationResult {
    /// Decode and validate a raw response body.
    ///
    /// # Errors
    ///
    /// - [`ContractError::NotAnObject`] if the body is not a JSON object
    /// - [`ContractError::MissingFields`] if required keys are absent
    /// - [`ContractError::Deserialize`] if a key has the wrong JSON type
    /// - [`ContractError::Invalid`] if values break the contract
    pub fn from_value(body: Value) -> Result<Self, ContractError> {
        let Value::Object(map) = body else {
            return Err(ContractError::NotAnObject(scalar::kind(&body)));
        };

        let missing = missing_fields(&map);
        if !missing.is_empty() {
            return Err(ContractError::MissingFields(missing));
        }

        let result: Self = serde_json::from_value(Value::Object(map))?;
        result.validate()?;
        Ok(result)
    }

    /// Check value constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Invalid`] listing every violation found.
    pub fn validate(&self) -> Result<(), ContractError> {
        let mut violations = Vec::new();

        if self.status.trim().is_empty() {
            violations.push("status is empty".to_string());
        }
        if !SCORE_RANGE.contains(&self.fraud_probability) {
            violations.push(format!(
                "fraudProbability {} outside [0, 100]",
                self.fraud_probability
            ));
        }
        if !SCORE_RANGE.contains(&self.confidence) {
            violations.push(format!("confidence {} outside [0, 100]", self.confidence));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ContractError::Invalid(violations))
        }
    }

    /// Whether two results carry different fraud scores.
    #[must_use]
    pub fn score_differs_from(&self, other: &Self) -> bool {
        (self.fraud_probability - other.fraud_probability).abs() > f64::EPSILON
    }
}
