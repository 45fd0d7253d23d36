//! Matching a freshly observed run to the dispatch that created it.
//!
//! The dispatch endpoint returns no run id, so the engine has to pick "the"
//! run out of a candidate listing. A candidate matches when its actor and
//! head branch equal the request's and it was created at-or-after the
//! dispatch timestamp, minus a small tolerance for clock skew between the
//! local clock and the platform's.
//!
//! When several candidates match, the earliest `created_at` wins: one
//! dispatch creates at most one run, so later matching rows are presumed to
//! be unrelated. Under concurrent dispatches to the same workflow and branch
//! by the same actor within the tolerance window this tie-break is a
//! heuristic and can pin the wrong run; nothing stronger is possible without
//! a platform-returned id.

use chrono::Duration as ChronoDuration;
use tracing::debug;

use crate::source::RunSource;
use crate::types::{CandidateRun, CorrelatedRun, DispatchRequest, PollOutcome};

/// Clock-skew tolerance applied to the dispatch timestamp.
const SKEW_TOLERANCE_SECS: i64 = 120;

/// Select the run this dispatch created, if it is visible yet.
///
/// Pure over the candidate slice; yields `Pending` when nothing matches and
/// never fabricates a match. Re-evaluated from scratch on every poll until a
/// run is pinned.
pub fn select_run(
    candidates: &[CandidateRun],
    request: &DispatchRequest,
) -> PollOutcome<CorrelatedRun> {
    let earliest_accepted =
        request.dispatched_at - ChronoDuration::seconds(SKEW_TOLERANCE_SECS);

    let matched = candidates
        .iter()
        .filter(|run| {
            run.actor == request.actor
                && run.head_branch == request.git_ref
                && run.created_at >= earliest_accepted
        })
        .min_by_key(|run| run.created_at);

    match matched {
        Some(run) => PollOutcome::Found(CorrelatedRun::from(run)),
        None => PollOutcome::Pending,
    }
}

/// One correlation poll: list candidates and apply the matching policy.
pub async fn correlate_once(
    source: &dyn RunSource,
    request: &DispatchRequest,
) -> runlink_client::Result<PollOutcome<CorrelatedRun>> {
    let since = request.dispatched_at - ChronoDuration::seconds(SKEW_TOLERANCE_SECS);
    let candidates = source.list_candidates(request, since).await?;
    debug!(
        candidates = candidates.len(),
        workflow = %request.workflow_ref,
        "correlation poll"
    );
    Ok(select_run(&candidates, request))
}
