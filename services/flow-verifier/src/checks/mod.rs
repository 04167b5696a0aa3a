//! The five flow checks.
//!
//! Each check prints its own section to the [`Reporter`](crate::Reporter)
//! and converts every error it meets into a [`CheckOutcome`](crate::CheckOutcome).
//! Only [`check_service_status`] hands its error back, because nothing else
//! can run without a reachable service.

mod cors;
mod history;
mod status;
mod variance;
mod verify;

pub use cors::check_cors;
pub use history::check_history;
pub use status::check_service_status;
pub use variance::check_prediction_variance;
pub use verify::verify_one;

use kyc_contract::{DocumentType, VerificationRequest};

/// Shell command that starts the backing service in development.
pub const START_HINT: &str = "cd backend && uvicorn main:app --reload";

/// Well-formed applicant used for the single verification check.
#[must_use]
pub fn sample_request() -> VerificationRequest {
    VerificationRequest::new(
        "John Doe",
        "123456789012",
        "123 Main Street, City, State 12345",
        DocumentType::Aadhar,
    )
}

/// Contrasting applicants for the variance check: plausible, then implausible.
#[must_use]
pub fn variance_requests() -> [VerificationRequest; 2] {
    [
        VerificationRequest::new(
            "Valid User",
            "111111111111",
            "123 Valid Street",
            DocumentType::Aadhar,
        ),
        VerificationRequest::new("Suspicious User", "999999999999", "X", DocumentType::Aadhar),
    ]
}
