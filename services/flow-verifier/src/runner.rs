//! Fixed-order flow run.

use crate::checks::{
    self, START_HINT, check_cors, check_history, check_prediction_variance, check_service_status,
    verify_one,
};
use crate::client::KycClient;
use crate::config::Config;
use crate::error::VerifierResult;
use crate::outcome::{Check, CheckOutcome, Summary};
use crate::report::Reporter;
use std::future::Future;
use std::io::Write;
use tracing::{info, instrument, warn};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Outcomes of the checks that ran
    pub summary: Summary,
    /// Whether the run stopped after a failed status check
    pub aborted: bool,
    /// Whether warnings count as passing
    pub allow_warnings: bool,
}

impl RunReport {
    /// Whether the run completed and every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.aborted && self.summary.all_passed(self.allow_warnings)
    }

    /// Process exit code: 0 on success, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.passed())
    }
}

/// Runs the checks against one service, in order:
/// status, verification, prediction variance, history, CORS.
#[derive(Debug, Clone)]
pub struct FlowVerifier {
    client: KycClient,
    origin: String,
    allow_warnings: bool,
}

impl FlowVerifier {
    /// Create a verifier from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> VerifierResult<Self> {
        Ok(Self::with_client(KycClient::new(config)?, config))
    }

    /// Create a verifier around an existing client.
    #[must_use]
    pub fn with_client(client: KycClient, config: &Config) -> Self {
        Self {
            client,
            origin: config.origin.clone(),
            allow_warnings: config.allow_warnings,
        }
    }

    /// Run every check and print the summary.
    ///
    /// A failed status check ends the run at once with no summary; every
    /// later check runs regardless of how the others went.
    #[instrument(skip_all, fields(base_url = %self.client.base_url()))]
    pub async fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> RunReport {
        let mut summary = Summary::new();
        reporter.banner(self.client.base_url());

        reporter.section(Check::ServiceStatus.title());
        if let Err(err) = check_service_status(&self.client, reporter).await {
            summary.record(Check::ServiceStatus, CheckOutcome::failed(err.to_string()));
            say!(reporter);
            say!(reporter, "❌ Backend is not running. Please start it first.");
            say!(reporter, "   Command: {START_HINT}");
            info!("Run aborted: service unavailable");
            return self.report(summary, true);
        }
        summary.record(Check::ServiceStatus, CheckOutcome::Passed);

        reporter.section(Check::Verification.title());
        let outcome = verify_one(&self.client, reporter, &checks::sample_request()).await;
        summary.record(Check::Verification, outcome);

        reporter.section(Check::PredictionVariance.title());
        let outcome =
            check_prediction_variance(&self.client, reporter, &checks::variance_requests()).await;
        summary.record(Check::PredictionVariance, outcome);

        reporter.section(Check::History.title());
        let outcome = check_history(&self.client, reporter).await;
        summary.record(Check::History, outcome);

        reporter.section(Check::Cors.title());
        let outcome = check_cors(&self.client, reporter, &self.origin).await;
        summary.record(Check::Cors, outcome);

        reporter.summary(&summary, self.allow_warnings);
        info!(
            failures = summary.failures(self.allow_warnings),
            "Run finished"
        );
        self.report(summary, false)
    }

    /// Run every check unless `cancel` completes first, returning the exit
    /// code.
    ///
    /// Cancellation drops the run mid-flight, prints an interruption notice
    /// instead of the summary and exits 1.
    pub async fn run_until<W, F>(&self, reporter: &mut Reporter<W>, cancel: F) -> u8
    where
        W: Write,
        F: Future<Output = ()>,
    {
        let finished = tokio::select! {
            biased;
            () = cancel => None,
            report = self.run(reporter) => Some(report.exit_code()),
        };

        finished.unwrap_or_else(|| {
            warn!("Run interrupted");
            say!(reporter);
            say!(reporter);
            say!(reporter, "Test interrupted by user");
            1
        })
    }

    fn report(&self, summary: Summary, aborted: bool) -> RunReport {
        RunReport {
            summary,
            aborted,
            allow_warnings: self.allow_warnings,
        }
    }
}
