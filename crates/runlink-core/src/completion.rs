//! Completion loop.
//!
//! Polls a run until it reaches a terminal state or the loop's budget
//! elapses. Unlike URL discovery, this path is load-bearing: transport
//! errors propagate and a timeout fails the invocation.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::correlate::correlate_once;
use crate::duration::format_duration;
use crate::error::Result;
use crate::source::RunSource;
use crate::types::{Conclusion, CorrelatedRun, DispatchRequest, PollOutcome};

/// Configuration for the completion loop.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Overall budget for the loop.
    pub timeout: Duration,
    /// Delay between polls.
    pub interval: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(3600),
            interval: Duration::from_secs(60),
        }
    }
}

/// Terminal state of the completion loop.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    /// The run finished with a non-failing conclusion.
    Succeeded(Conclusion),
    /// The run finished with failure, cancelled, or timed_out.
    Failed(Conclusion),
    /// The budget elapsed before the run reached a terminal state (or the
    /// run was never correlated at all).
    TimedOut,
}

/// Poll the run until it reaches a terminal state or the budget elapses.
///
/// When no run is pinned yet (URL discovery disabled or timed out), each
/// poll first retries correlation, so the loop still resolves within its own
/// budget even if the run never becomes visible.
pub async fn await_completion(
    source: &dyn RunSource,
    request: &DispatchRequest,
    pinned: Option<CorrelatedRun>,
    config: &CompletionConfig,
) -> Result<CompletionOutcome> {
    if config.timeout.is_zero() {
        return Ok(CompletionOutcome::TimedOut);
    }

    let deadline = Instant::now() + config.timeout;
    let mut pinned = pinned;
    loop {
        if pinned.is_none() {
            if let PollOutcome::Found(run) = correlate_once(source, request).await? {
                info!(run_id = run.id, "run pinned for completion tracking");
                pinned = Some(run);
            }
        }

        if let Some(run) = &pinned {
            let current = source.fetch_run(request, run.id).await?;
            if current.status.is_terminal() {
                let conclusion = current
                    .conclusion
                    .unwrap_or_else(|| Conclusion::Unknown(String::new()));
                return Ok(if conclusion.is_failing() {
                    warn!(run_id = run.id, %conclusion, "workflow run failed");
                    CompletionOutcome::Failed(conclusion)
                } else {
                    info!(run_id = run.id, %conclusion, "workflow run completed");
                    CompletionOutcome::Succeeded(conclusion)
                });
            }
            debug!(run_id = run.id, status = ?current.status, "run still executing");
        }

        // Never sleep past the deadline, so a budget smaller than the
        // interval still resolves on time.
        let remaining = deadline.saturating_duration_since(Instant::now());
        tokio::time::sleep(config.interval.min(remaining)).await;
        if Instant::now() >= deadline {
            warn!(
                timeout = %format_duration(config.timeout),
                "workflow run did not complete within timeout"
            );
            return Ok(CompletionOutcome::TimedOut);
        }
    }
}
