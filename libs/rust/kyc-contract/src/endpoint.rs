//! Endpoints exposed by the KYC verification service.

use std::fmt;

/// A route of the KYC verification API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Service status and model readiness
    Status,
    /// Submit a verification request
    VerifyKyc,
    /// Past verification records
    History,
}

impl Endpoint {
    /// Request path relative to the service base URL.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Status => "/",
            Self::VerifyKyc => "/api/verify-kyc",
            Self::History => "/api/history",
        }
    }

    /// HTTP method used for the regular (non-preflight) call.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Status | Self::History => "GET",
            Self::VerifyKyc => "POST",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
