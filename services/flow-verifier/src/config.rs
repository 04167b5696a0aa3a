//! Centralized configuration for the flow verifier.
//!
//! Values come from command-line flags, each of which falls back to an
//! environment variable (a `.env` file is loaded first) and then to a
//! default. Everything is validated before the first request is sent.

use crate::error::{VerifierError, VerifierResult};
use clap::Parser;
use kyc_common::{HttpConfig, TracingConfig, parse_base_url};
use std::time::Duration;

/// Default KYC service address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Origin sent on the CORS preflight; the frontend dev server.
pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

/// Command-line interface.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the KYC verification service
    #[arg(long, env = "KYC_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Origin header sent on the CORS preflight
    #[arg(long, env = "KYC_CORS_ORIGIN", default_value = DEFAULT_ORIGIN)]
    pub origin: String,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "KYC_HTTP_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Count warnings (CORS headers absent, identical predictions) as passing
    #[arg(long, env = "KYC_ALLOW_WARNINGS")]
    pub allow_warnings: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "KYC_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON on stderr
    #[arg(long, env = "KYC_JSON_LOGS")]
    pub json_logs: bool,
}

/// Flow verifier configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Normalized service base URL, without trailing slash
    pub base_url: String,
    /// Origin header for the CORS preflight
    pub origin: String,
    /// Whether warnings count as passing in the aggregate
    pub allow_warnings: bool,
    /// HTTP client settings
    pub http: HttpConfig,
    /// Logging settings
    pub tracing: TracingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            allow_warnings: false,
            http: http_config(Duration::from_secs(30)),
            tracing: TracingConfig::default().with_service_name(env!("CARGO_PKG_NAME")),
        }
    }
}

impl Config {
    /// Load configuration from the process arguments and environment.
    ///
    /// Exits the process with a usage message if the arguments do not parse.
    ///
    /// # Errors
    ///
    /// Returns an error if a value parses but is invalid.
    pub fn load() -> VerifierResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_cli(Cli::parse())
    }

    /// Build configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or origin is not an absolute
    /// http(s) URL.
    pub fn from_cli(cli: Cli) -> VerifierResult<Self> {
        let base_url = parse_base_url(&cli.base_url)?;
        let origin = parse_base_url(&cli.origin)
            .map_err(|e| VerifierError::config(format!("invalid origin '{}': {e}", cli.origin)))?;

        Ok(Self {
            base_url,
            origin,
            allow_warnings: cli.allow_warnings,
            http: http_config(Duration::from_secs(cli.timeout_secs)),
            tracing: TracingConfig::default()
                .with_service_name(env!("CARGO_PKG_NAME"))
                .with_log_level(cli.log_level)
                .with_json_output(cli.json_logs),
        })
    }

    /// Configuration pointing at `base_url` with every other value defaulted.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL.
    pub fn for_base_url(base_url: &str) -> VerifierResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Set the CORS origin.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Count warnings as passing.
    #[must_use]
    pub const fn with_allow_warnings(mut self, allow: bool) -> Self {
        self.allow_warnings = allow;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = http_config(timeout);
        self
    }
}

fn http_config(timeout: Duration) -> HttpConfig {
    HttpConfig::default()
        .with_timeout(timeout)
        .with_connect_timeout(timeout.min(Duration::from_secs(10)))
        .with_user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
}
