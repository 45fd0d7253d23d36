//! The engine's only I/O boundary.
//!
//! `RunSource` abstracts the three remote operations the engine needs, so the
//! polling loops can be driven by the real client or by a scripted mock in
//! tests. Every call consumes remote rate-limit quota, which is why poll
//! intervals are caller-configurable and never default to near-zero.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use runlink_client::{GithubClient, ListRunsQuery, WorkflowRun};

use crate::types::{CandidateRun, Conclusion, DispatchRequest, RunStatus};

/// Abstract source of workflow runs.
#[async_trait]
pub trait RunSource: Send + Sync {
    /// Fire the `workflow_dispatch` event. Not idempotent remotely; the
    /// orchestrator calls this exactly once per invocation.
    async fn dispatch(&self, request: &DispatchRequest) -> runlink_client::Result<()>;

    /// List runs of the request's workflow triggered by its actor on its
    /// branch, created at-or-after `since`. Ordering is not guaranteed.
    async fn list_candidates(
        &self,
        request: &DispatchRequest,
        since: DateTime<Utc>,
    ) -> runlink_client::Result<Vec<CandidateRun>>;

    /// Fetch the current state of a pinned run.
    async fn fetch_run(
        &self,
        request: &DispatchRequest,
        run_id: u64,
    ) -> runlink_client::Result<CandidateRun>;
}

fn candidate_from_wire(run: WorkflowRun) -> CandidateRun {
    CandidateRun {
        id: run.id,
        html_url: run.html_url,
        actor: run.actor.login,
        head_branch: run.head_branch,
        created_at: run.created_at,
        status: RunStatus::parse(&run.status),
        conclusion: run.conclusion.as_deref().map(Conclusion::parse),
    }
}

#[async_trait]
impl RunSource for GithubClient {
    async fn dispatch(&self, request: &DispatchRequest) -> runlink_client::Result<()> {
        self.workflows()
            .dispatch(
                &request.owner,
                &request.repo,
                &request.workflow_ref,
                &request.git_ref,
                request.inputs.clone(),
            )
            .await
    }

    async fn list_candidates(
        &self,
        request: &DispatchRequest,
        since: DateTime<Utc>,
    ) -> runlink_client::Result<Vec<CandidateRun>> {
        let created = format!(">={}", since.to_rfc3339_opts(SecondsFormat::Secs, true));
        let listing = self
            .runs()
            .list_for_workflow(
                &request.owner,
                &request.repo,
                &request.workflow_ref,
                ListRunsQuery {
                    actor: Some(request.actor.clone()),
                    branch: Some(request.git_ref.clone()),
                    created: Some(created),
                    event: Some("workflow_dispatch".to_string()),
                    per_page: Some(100),
                },
            )
            .await?;

        Ok(listing
            .workflow_runs
            .into_iter()
            .map(candidate_from_wire)
            .collect())
    }

    async fn fetch_run(
        &self,
        request: &DispatchRequest,
        run_id: u64,
    ) -> runlink_client::Result<CandidateRun> {
        let run = self
            .runs()
            .get(&request.owner, &request.repo, run_id)
            .await?;
        Ok(candidate_from_wire(run))
    }
}
