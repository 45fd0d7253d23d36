//! Workflow runs API.

use crate::client::GithubClient;
use crate::error::Result;
use crate::types::{ListRunsResponse, WorkflowRun};

/// Query parameters for listing a workflow's runs.
#[derive(Debug, Default, serde::Serialize)]
pub struct ListRunsQuery {
    /// Filter by the login of the user that triggered the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    /// Filter by head branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Filter by creation time, e.g. `>=2026-08-29T12:00:00Z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Filter by triggering event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Workflow runs API client.
pub struct RunsApi {
    client: GithubClient,
}

impl RunsApi {
    pub(crate) fn new(client: GithubClient) -> Self {
        Self { client }
    }

    /// List runs of a workflow.
    ///
    /// Ordering of the returned runs is not guaranteed by the remote side.
    pub async fn list_for_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow_ref: &str,
        query: ListRunsQuery,
    ) -> Result<ListRunsResponse> {
        self.client
            .get_with_query(
                &format!(
                    "repos/{}/{}/actions/workflows/{}/runs",
                    owner, repo, workflow_ref
                ),
                &query,
            )
            .await
    }

    /// Get the current state of a run by id.
    pub async fn get(&self, owner: &str, repo: &str, run_id: u64) -> Result<WorkflowRun> {
        self.client
            .get(&format!("repos/{}/{}/actions/runs/{}", owner, repo, run_id))
            .await
    }
}
