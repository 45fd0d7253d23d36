//! Domain types for one dispatch-and-await invocation.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::EngineError;

// ─────────────────────────────────────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────────────────────────────────────

/// Everything needed to fire one `workflow_dispatch` event and find the run
/// it creates. Immutable once constructed; one per invocation.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    /// Workflow filename or numeric id (display names are resolved before
    /// this struct is built, since the dispatch endpoint accepts neither).
    pub workflow_ref: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Git reference to run the workflow on.
    pub git_ref: String,
    /// Login of the dispatching user, used for correlation.
    pub actor: String,
    /// Inputs forwarded to the workflow.
    pub inputs: HashMap<String, String>,
    /// When the dispatch was issued; polls only consider runs created
    /// at-or-after this instant (minus a clock-skew tolerance).
    pub dispatched_at: DateTime<Utc>,
}

impl DispatchRequest {
    /// Build a request, snapshotting the dispatch timestamp now.
    pub fn new(
        workflow_ref: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        git_ref: impl Into<String>,
        actor: impl Into<String>,
        inputs: HashMap<String, String>,
    ) -> Self {
        Self {
            workflow_ref: workflow_ref.into(),
            owner: owner.into(),
            repo: repo.into(),
            git_ref: git_ref.into(),
            actor: actor.into(),
            inputs,
            dispatched_at: Utc::now(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Runs
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle status of a run. Only `Completed` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    /// Any status string this crate does not recognize; never terminal.
    Unknown(String),
}

impl RunStatus {
    /// Parse a wire status string.
    pub fn parse(value: &str) -> Self {
        match value {
            "queued" => RunStatus::Queued,
            "in_progress" => RunStatus::InProgress,
            "completed" => RunStatus::Completed,
            other => RunStatus::Unknown(other.to_string()),
        }
    }

    /// Whether the run can still transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Completed)
    }
}

/// Terminal outcome of a completed run.
///
/// The closed set comes from the platform; anything else is `Unknown` and is
/// treated as non-failing (permissive default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conclusion {
    Success,
    Failure,
    Cancelled,
    TimedOut,
    Skipped,
    Neutral,
    ActionRequired,
    Unknown(String),
}

impl Conclusion {
    /// Parse a wire conclusion string.
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => Conclusion::Success,
            "failure" => Conclusion::Failure,
            "cancelled" => Conclusion::Cancelled,
            "timed_out" => Conclusion::TimedOut,
            "skipped" => Conclusion::Skipped,
            "neutral" => Conclusion::Neutral,
            "action_required" => Conclusion::ActionRequired,
            other => Conclusion::Unknown(other.to_string()),
        }
    }

    /// Whether this conclusion fails the invocation.
    pub fn is_failing(&self) -> bool {
        matches!(
            self,
            Conclusion::Failure | Conclusion::Cancelled | Conclusion::TimedOut
        )
    }

    /// The wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Conclusion::Success => "success",
            Conclusion::Failure => "failure",
            Conclusion::Cancelled => "cancelled",
            Conclusion::TimedOut => "timed_out",
            Conclusion::Skipped => "skipped",
            Conclusion::Neutral => "neutral",
            Conclusion::ActionRequired => "action_required",
            Conclusion::Unknown(other) => other,
        }
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a run-listing response.
///
/// Fetched fresh on every poll and never cached across polls, because runs
/// transition between calls.
#[derive(Debug, Clone)]
pub struct CandidateRun {
    /// Platform-assigned run id.
    pub id: u64,
    /// Browser URL for the run.
    pub html_url: String,
    /// Login of the user that triggered the run.
    pub actor: String,
    /// Branch the run executes on.
    pub head_branch: String,
    /// When the run was created.
    pub created_at: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: RunStatus,
    /// Terminal outcome, once the run completes.
    pub conclusion: Option<Conclusion>,
}

/// A candidate promoted to "the" run this invocation triggered.
///
/// Once pinned, the id never changes within an invocation; later polls fetch
/// only this run's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelatedRun {
    /// Pinned run id.
    pub id: u64,
    /// Browser URL for the run.
    pub html_url: String,
    /// When the run was created.
    pub created_at: DateTime<Utc>,
}

impl From<&CandidateRun> for CorrelatedRun {
    fn from(run: &CandidateRun) -> Self {
        Self {
            id: run.id,
            html_url: run.html_url.clone(),
            created_at: run.created_at,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Poll outcomes
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of one poll (or of a whole polling loop).
///
/// `Found` and `TimedOut` are terminal; no further polling happens after
/// either.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome<T> {
    /// Nothing yet; poll again after the interval.
    Pending,
    /// The thing polled for.
    Found(T),
    /// The loop's budget elapsed without finding it.
    TimedOut,
}

/// Terminal output of an invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResult {
    /// Browser URL of the triggered run, when URL discovery found it in time.
    pub workflow_url: Option<String>,
    /// Terminal conclusion, when completion tracking was enabled and the run
    /// finished within budget.
    pub conclusion: Option<Conclusion>,
    /// Whether the invocation passes as a whole.
    pub succeeded: bool,
}

impl InvocationResult {
    /// Map the pass/fail flag onto the error taxonomy, for callers that
    /// propagate failure as an error.
    pub fn ensure_success(&self) -> Result<(), EngineError> {
        if self.succeeded {
            return Ok(());
        }
        match &self.conclusion {
            Some(conclusion) => Err(EngineError::WorkflowFailed {
                conclusion: conclusion.clone(),
            }),
            None => Err(EngineError::CompletionTimeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_and_terminality() {
        assert_eq!(RunStatus::parse("queued"), RunStatus::Queued);
        assert_eq!(RunStatus::parse("in_progress"), RunStatus::InProgress);
        assert_eq!(RunStatus::parse("completed"), RunStatus::Completed);
        assert_eq!(
            RunStatus::parse("waiting"),
            RunStatus::Unknown("waiting".to_string())
        );

        assert!(RunStatus::Completed.is_terminal());
        assert!(!RunStatus::Queued.is_terminal());
        assert!(!RunStatus::Unknown("waiting".to_string()).is_terminal());
    }

    #[test]
    fn failing_conclusions() {
        for raw in ["failure", "cancelled", "timed_out"] {
            assert!(Conclusion::parse(raw).is_failing(), "{raw}");
        }
        for raw in ["success", "skipped", "neutral", "action_required"] {
            assert!(!Conclusion::parse(raw).is_failing(), "{raw}");
        }
    }

    #[test]
    fn unknown_conclusion_is_permissive() {
        let conclusion = Conclusion::parse("stale");
        assert_eq!(conclusion, Conclusion::Unknown("stale".to_string()));
        assert!(!conclusion.is_failing());
        assert_eq!(conclusion.as_str(), "stale");
    }

    #[test]
    fn ensure_success_maps_failures() {
        let ok = InvocationResult {
            workflow_url: None,
            conclusion: Some(Conclusion::Success),
            succeeded: true,
        };
        assert!(ok.ensure_success().is_ok());

        let failed = InvocationResult {
            workflow_url: None,
            conclusion: Some(Conclusion::Cancelled),
            succeeded: false,
        };
        assert!(matches!(
            failed.ensure_success(),
            Err(EngineError::WorkflowFailed {
                conclusion: Conclusion::Cancelled
            })
        ));

        let timed_out = InvocationResult {
            workflow_url: None,
            conclusion: None,
            succeeded: false,
        };
        assert!(matches!(
            timed_out.ensure_success(),
            Err(EngineError::CompletionTimeout)
        ));
    }
}
