//! Centralized error types for the KYC platform libraries.
//!
//! Errors are classified as transport failures (the remote end could not be
//! reached or did not answer in time) or everything else, which lets callers
//! tell "service is down" apart from "service answered badly".

use thiserror::Error;

/// Common error type for platform operations.
#[derive(Error, Debug)]
pub enum CommonError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CommonError {
    /// Check if this error is a transport failure.
    ///
    /// Transport failures are connection refusals, DNS errors, timeouts and
    /// other errors raised before an HTTP response was received.
    ///
    /// # Examples
    ///
    /// ```
    /// use kyc_common::CommonError;
    ///
    /// let err = CommonError::invalid_input("empty base url");
    /// assert!(!err.is_transport());
    /// ```
    #[must_use]
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Create an invalid input error with the given message.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an internal error with the given message.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
