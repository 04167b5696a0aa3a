//! Verification request payload.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity document kind accepted by the verification endpoint.
///
/// Unknown values are carried verbatim so callers can probe how the service
/// treats document types it does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentType {
    /// Aadhaar national ID
    Aadhar,
    /// Permanent Account Number card
    Pan,
    /// Passport
    Passport,
    /// Driving licence
    DrivingLicense,
    /// Voter ID card
    VoterId,
    /// Any other value
    Other(String),
}

impl DocumentType {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Aadhar => "AADHAR",
            Self::Pan => "PAN",
            Self::Passport => "PASSPORT",
            Self::DrivingLicense => "DRIVING_LICENSE",
            Self::VoterId => "VOTER_ID",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for DocumentType {
    fn from(value: String) -> Self {
        match value.to_uppercase().as_str() {
            "AADHAR" | "AADHAAR" => Self::Aadhar,
            "PAN" => Self::Pan,
            "PASSPORT" => Self::Passport,
            "DRIVING_LICENSE" => Self::DrivingLicense,
            "VOTER_ID" => Self::VoterId,
            _ => Self::Other(value),
        }
    }
}

impl From<DocumentType> for String {
    fn from(value: DocumentType) -> Self {
        match value {
            DocumentType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/verify-kyc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    /// Applicant full name
    pub name: String,
    /// Document number as printed
    pub document_number: String,
    /// Postal address
    pub address: String,
    /// Document kind
    pub document_type: DocumentType,
}

impl VerificationRequest {
    /// Create a new request.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        document_number: impl Into<String>,
        address: impl Into<String>,
        document_type: DocumentType,
    ) -> Self {
        Self {
            name: name.into(),
            document_number: document_number.into(),
            address: address.into(),
            document_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_camel_case() {
        let request = VerificationRequest::new(
            "John Doe",
            "123456789012",
            "123 Main Street, City, State 12345",
            DocumentType::Aadhar,
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "John Doe",
                "documentNumber": "123456789012",
                "address": "123 Main Street, City, State 12345",
                "documentType": "AADHAR"
            })
        );
    }

    #[test]
    fn test_document_type_parsing() {
        assert_eq!(DocumentType::from("aadhaar".to_string()), DocumentType::Aadhar);
        assert_eq!(DocumentType::from("PAN".to_string()), DocumentType::Pan);
        assert_eq!(
            DocumentType::from("library-card".to_string()),
            DocumentType::Other("library-card".to_string())
        );
    }

    #[test]
    fn test_other_document_type_kept_verbatim() {
        let value = serde_json::to_value(DocumentType::Other("Library Card".to_string())).unwrap();
        assert_eq!(value, json!("Library Card"));
    }
}
