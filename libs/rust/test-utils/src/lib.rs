//! Shared test utilities for KYC platform Rust crates.
//!
//! This crate provides:
//! - Proptest generators for the KYC wire types
//! - A mock KYC verification service backed by wiremock
//! - Test fixtures with sample response bodies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod mocks;

pub use generators::*;
pub use mocks::MockKycService;
