//! Flow verifier error types.
//!
//! Variants follow how a check can go wrong: the service could not be
//! reached, it answered with an unexpected status, or its body was not the
//! JSON the contract describes.

use kyc_common::CommonError;
use kyc_contract::{ContractError, Endpoint};
use thiserror::Error;

/// Flow verifier errors.
#[derive(Error, Debug)]
pub enum VerifierError {
    /// Connection refused, DNS failure, timeout or broken body stream
    #[error("{endpoint} failed: {source}")]
    Transport {
        /// Endpoint being called
        endpoint: Endpoint,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a status other than 200
    #[error("{endpoint} returned status code: {status}")]
    UnexpectedStatus {
        /// Endpoint being called
        endpoint: Endpoint,
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Body is not the JSON shape the endpoint promises
    #[error("{endpoint} returned malformed JSON: {reason}")]
    MalformedBody {
        /// Endpoint being called
        endpoint: Endpoint,
        /// Parser message
        reason: String,
    },

    /// Verification response breaks the result contract
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Platform error
    #[error(transparent)]
    Common(#[from] CommonError),
}

/// Result type for flow verifier operations.
pub type VerifierResult<T> = Result<T, VerifierError>;

impl VerifierError {
    /// Check if the service could not be reached at all.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Common(e) => e.is_transport(),
            _ => false,
        }
    }

    /// HTTP status of an unexpected response, if that is what this is.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Create a malformed body error.
    #[must_use]
    pub fn malformed(endpoint: Endpoint, reason: impl ToString) -> Self {
        Self::MalformedBody {
            endpoint,
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
