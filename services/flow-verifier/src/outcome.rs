//! Check identities, outcomes and the run summary.

use std::fmt;

/// The checks of a flow run, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// Service is up and reports model readiness
    ServiceStatus,
    /// A single verification returns a complete result
    Verification,
    /// Contrasting inputs get different fraud scores
    PredictionVariance,
    /// History endpoint lists past results
    History,
    /// Preflight carries CORS headers
    Cors,
}

impl Check {
    /// Every check, in run order.
    pub const ALL: [Self; 5] = [
        Self::ServiceStatus,
        Self::Verification,
        Self::PredictionVariance,
        Self::History,
        Self::Cors,
    ];

    /// Short name used in the summary.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ServiceStatus => "Backend Status",
            Self::Verification => "API Verification",
            Self::PredictionVariance => "Model Prediction",
            Self::History => "History API",
            Self::Cors => "CORS",
        }
    }

    /// Section heading printed before the check runs.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ServiceStatus => "TEST 1: Backend Status Check",
            Self::Verification => "TEST 2: KYC Verification API",
            Self::PredictionVariance => "TEST 3: Model Prediction Verification",
            Self::History => "TEST 4: History API",
            Self::Cors => "TEST 5: CORS Configuration",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Everything as expected
    Passed,
    /// Suspicious but not broken
    Warned(String),
    /// Broken
    Failed(String),
}

impl CheckOutcome {
    /// Create a warning.
    #[must_use]
    pub fn warned(reason: impl Into<String>) -> Self {
        Self::Warned(reason.into())
    }

    /// Create a failure.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    /// Whether this outcome counts as passing.
    #[must_use]
    pub const fn is_pass(&self, allow_warnings: bool) -> bool {
        match self {
            Self::Passed => true,
            Self::Warned(_) => allow_warnings,
            Self::Failed(_) => false,
        }
    }

    /// Summary tag.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Passed => "✅ PASS",
            Self::Warned(_) => "⚠️  WARN",
            Self::Failed(_) => "❌ FAIL",
        }
    }

    /// Reason attached to a warning or failure.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Passed => None,
            Self::Warned(r) | Self::Failed(r) => Some(r),
        }
    }
}

/// Outcomes collected during a run, in the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    entries: Vec<(Check, CheckOutcome)>,
}

impl Summary {
    /// Create an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a check.
    pub fn record(&mut self, check: Check, outcome: CheckOutcome) {
        self.entries.push((check, outcome));
    }

    /// Recorded outcomes in run order.
    #[must_use]
    pub fn entries(&self) -> &[(Check, CheckOutcome)] {
        &self.entries
    }

    /// Outcome recorded for `check`, if it ran.
    #[must_use]
    pub fn outcome(&self, check: Check) -> Option<&CheckOutcome> {
        self.entries.iter().find(|(c, _)| *c == check).map(|(_, o)| o)
    }

    /// Whether every check ran and passed.
    #[must_use]
    pub fn all_passed(&self, allow_warnings: bool) -> bool {
        Check::ALL.iter().all(|check| {
            self.outcome(*check)
                .is_some_and(|outcome| outcome.is_pass(allow_warnings))
        })
    }

    /// Number of outcomes that do not count as passing.
    #[must_use]
    pub fn failures(&self, allow_warnings: bool) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| !outcome.is_pass(allow_warnings))
            .count()
    }
}
