//! CORS preflight as the browser frontend would send it.

use crate::client::KycClient;
use crate::outcome::CheckOutcome;
use crate::report::Reporter;
use std::io::Write;
use tracing::{instrument, warn};

/// Send a browser-style preflight and look for CORS headers.
///
/// Missing headers and a failed probe are both warnings: CORS may be added
/// by middleware that does not answer bare preflights.
#[instrument(skip_all, fields(origin = %origin))]
pub async fn check_cors<W: Write>(
    client: &KycClient,
    reporter: &mut Reporter<W>,
    origin: &str,
) -> CheckOutcome {
    match client.preflight(origin).await {
        Ok(cors) => match cors.allow_origin {
            Some(allow_origin) => {
                say!(reporter, "✅ CORS is configured");
                say!(reporter, "   Allow Origin: {allow_origin}");
                if let Some(methods) = &cors.allow_methods {
                    say!(reporter, "   Allow Methods: {methods}");
                }
                CheckOutcome::Passed
            }
            None => {
                warn!(status = cors.status, "Preflight carried no CORS headers");
                say!(reporter, "⚠️  CORS headers not found (might still work with middleware)");
                CheckOutcome::warned("CORS headers not found")
            }
        },
        Err(err) => {
            warn!(error = %err, "CORS preflight failed");
            say!(reporter, "⚠️  CORS test failed: {err}");
            CheckOutcome::warned(format!("preflight failed: {err}"))
        }
    }
}
