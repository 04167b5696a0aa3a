//! End-to-end smoke test for the KYC verification API.
//!
//! Runs a fixed sequence of checks against a running service:
//! service status, a single verification, prediction variance, history and
//! CORS preflight. Each check reports to a [`Reporter`] and records a
//! [`CheckOutcome`]; the [`FlowVerifier`] turns the collected outcomes into a
//! process exit code.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod report;

pub mod checks;
pub mod client;
pub mod config;
pub mod error;
pub mod outcome;
pub mod runner;

pub use client::{CorsHeaders, KycClient};
pub use config::{Cli, Config};
pub use error::{VerifierError, VerifierResult};
pub use outcome::{Check, CheckOutcome, Summary};
pub use report::Reporter;
pub use runner::{FlowVerifier, RunReport};
