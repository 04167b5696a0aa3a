//! KYC verification API contract.
//!
//! Provides the request and response types exchanged with the KYC
//! verification service, together with the validation rules a response has
//! to satisfy before a consumer may rely on it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod endpoint;
pub mod error;
pub mod history;
pub mod request;
pub mod result;
mod scalar;
pub mod status;

pub use endpoint::Endpoint;
pub use error::ContractError;
pub use history::{HistoryRecord, latest};
pub use request::{DocumentType, VerificationRequest};
pub use result::{REQUIRED_FIELDS, RecordId, SCORE_RANGE, VerificationResult, missing_fields};
pub use scalar::text as display_value;
pub use status::ServiceStatus;
