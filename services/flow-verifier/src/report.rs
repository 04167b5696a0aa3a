//! Human-readable run report.
//!
//! The report is the tool's user interface and goes to stdout; diagnostics
//! meant for operators go through `tracing` to stderr instead.

use crate::outcome::Summary;
use std::fmt;
use std::io::{self, Write};

/// Width of the `=` rule around section headings.
pub const RULE_WIDTH: usize = 60;

/// Writes a line to a [`Reporter`] with `format!` syntax.
macro_rules! say {
    ($reporter:expr) => {
        $reporter.blank()
    };
    ($reporter:expr, $($arg:tt)*) => {
        $reporter.line(format_args!($($arg)*))
    };
}

/// Report sink.
///
/// Write errors do not interrupt a run: the first one is kept and returned
/// by [`Reporter::finish`], later output is dropped.
pub struct Reporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl Reporter<io::Stdout> {
    /// Report to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    /// Report to `out`.
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Write one line.
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            self.error = Some(e);
        }
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.line(format_args!(""));
    }

    /// Write a full-width rule.
    pub fn rule(&mut self) {
        self.line(format_args!("{}", "=".repeat(RULE_WIDTH)));
    }

    /// Write a section heading framed by rules, preceded by a blank line.
    pub fn section(&mut self, title: &str) {
        self.blank();
        self.rule();
        self.line(format_args!("{title}"));
        self.rule();
    }

    /// Write the opening banner.
    pub fn banner(&mut self, base_url: &str) {
        self.section("COMPLETE FLOW VERIFICATION TEST");
        say!(self);
        say!(self, "Testing: Frontend → Backend → Model → Results → Display");
        say!(self, "Target:  {base_url}");
    }

    /// Write the per-check summary and the overall verdict.
    pub fn summary(&mut self, summary: &Summary, allow_warnings: bool) {
        self.section("TEST SUMMARY");
        for (check, outcome) in summary.entries() {
            match outcome.reason() {
                Some(reason) => say!(self, "{}: {check} ({reason})", outcome.tag()),
                None => say!(self, "{}: {check}", outcome.tag()),
            }
        }

        say!(self);
        self.rule();
        if summary.all_passed(allow_warnings) {
            say!(self, "✅ ALL TESTS PASSED - Flow is working correctly!");
            say!(self);
            say!(self, "Flow Status:");
            say!(self, "  ✅ Frontend can send data via API");
            say!(self, "  ✅ Backend receives and processes data");
            say!(self, "  ✅ Model makes predictions (or uses fallback)");
            say!(self, "  ✅ Results are returned in correct format");
            say!(self, "  ✅ Frontend can display results (table, score, alert)");
        } else {
            say!(self, "⚠️  SOME TESTS FAILED - Check issues above");
        }
        self.rule();
        say!(self);
    }

    /// Flush and return the sink, or the first write error.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing or flushing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
