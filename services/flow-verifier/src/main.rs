//! `kyc-flow-verifier` binary: runs the flow checks once and exits with the
//! verdict.

use anyhow::Context;
use kyc_common::init_tracing;
use kyc_flow_verifier::{Config, FlowVerifier, Reporter};
use std::process::ExitCode;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let config = Config::load().context("invalid configuration")?;
    init_tracing(&config.tracing).context("failed to initialize tracing")?;

    info!(base_url = %config.base_url, "Starting KYC flow verification");
    let verifier = FlowVerifier::new(&config).context("failed to build HTTP client")?;
    let mut reporter = Reporter::stdout();

    let code = verifier.run_until(&mut reporter, ctrl_c()).await;

    if let Err(err) = reporter.finish() {
        error!(error = %err, "Failed to write report");
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::from(code))
}

/// Completes on Ctrl-C; never completes if the handler cannot be installed.
async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
