//! Contract violation errors.

use thiserror::Error;

/// A response that does not satisfy the KYC API contract.
#[derive(Error, Debug)]
pub enum ContractError {
    /// Body is valid JSON but not an object
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// Required keys are absent
    #[error("Missing fields in response: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Keys are present but their values break the contract
    #[error("Invalid response: {}", .0.join("; "))]
    Invalid(Vec<String>),

    /// Keys are present but have the wrong JSON type
    #[error("Unexpected field type: {0}")]
    Deserialize(#[from] serde_json::Error),
}
