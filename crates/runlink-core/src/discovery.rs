//! URL discovery loop.
//!
//! Polls correlation until the triggered run becomes visible or the loop's
//! own budget elapses. This path is best-effort: timing out and transport
//! errors degrade to an absent URL, never to a failed invocation.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::correlate::correlate_once;
use crate::duration::format_duration;
use crate::source::RunSource;
use crate::types::{CorrelatedRun, DispatchRequest, PollOutcome};

/// Configuration for the URL discovery loop.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Whether to surface the run URL at all.
    pub enabled: bool,
    /// Overall budget for the loop.
    pub timeout: Duration,
    /// Delay between polls.
    pub interval: Duration,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout: Duration::from_secs(600),
            interval: Duration::from_secs(60),
        }
    }
}

/// Poll until the triggered run is correlated or the budget elapses.
///
/// A disabled loop or a zero timeout performs zero polls and yields
/// `TimedOut` immediately.
pub async fn discover_run_url(
    source: &dyn RunSource,
    request: &DispatchRequest,
    config: &DiscoveryConfig,
) -> PollOutcome<CorrelatedRun> {
    if !config.enabled || config.timeout.is_zero() {
        debug!("URL discovery disabled, skipping");
        return PollOutcome::TimedOut;
    }

    let deadline = Instant::now() + config.timeout;
    loop {
        match correlate_once(source, request).await {
            Ok(PollOutcome::Found(run)) => {
                info!(run_id = run.id, url = %run.html_url, "workflow run located");
                return PollOutcome::Found(run);
            }
            Ok(_) => debug!("triggered run not visible yet"),
            Err(err) => warn!(error = %err, "URL discovery poll failed, will retry"),
        }

        // Never sleep past the deadline, so a budget smaller than the
        // interval still resolves on time.
        let remaining = deadline.saturating_duration_since(Instant::now());
        tokio::time::sleep(config.interval.min(remaining)).await;
        if Instant::now() >= deadline {
            warn!(
                timeout = %format_duration(config.timeout),
                "workflow run URL not found within timeout"
            );
            return PollOutcome::TimedOut;
        }
    }
}
