//! Shared library for cross-cutting concerns in KYC platform Rust tools.
//!
//! This crate provides centralized implementations for:
//! - Error types with transport classification
//! - HTTP client configuration, building and URL joining
//! - Tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod http;
pub mod tracing_config;

pub use error::CommonError;
pub use http::{HttpConfig, build_http_client, join_url, parse_base_url};
pub use tracing_config::{TracingConfig, init_tracing};
