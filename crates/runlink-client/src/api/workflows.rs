//! Workflows API.

use std::collections::HashMap;

use crate::client::GithubClient;
use crate::error::{Error, Result};
use crate::types::{DispatchEventRequest, ListWorkflowsResponse, Workflow};

/// Workflows API client.
pub struct WorkflowsApi {
    client: GithubClient,
}

impl WorkflowsApi {
    pub(crate) fn new(client: GithubClient) -> Self {
        Self { client }
    }

    /// List all workflows registered in a repository.
    pub async fn list(&self, owner: &str, repo: &str) -> Result<ListWorkflowsResponse> {
        self.client
            .get_with_query(
                &format!("repos/{}/{}/actions/workflows", owner, repo),
                &[("per_page", "100")],
            )
            .await
    }

    /// Get a single workflow by filename or numeric id.
    pub async fn get(&self, owner: &str, repo: &str, workflow_ref: &str) -> Result<Workflow> {
        self.client
            .get(&format!(
                "repos/{}/{}/actions/workflows/{}",
                owner, repo, workflow_ref
            ))
            .await
    }

    /// Resolve a workflow reference (display name, filename, or numeric id)
    /// to the workflow it names.
    ///
    /// The dispatch and run-listing endpoints only accept a filename or a
    /// numeric id in their path, so display names have to go through the
    /// listing endpoint first.
    pub async fn resolve(&self, owner: &str, repo: &str, workflow_ref: &str) -> Result<Workflow> {
        // Filenames and ids address the workflow endpoint directly.
        if workflow_ref.parse::<u64>().is_ok()
            || workflow_ref.ends_with(".yml")
            || workflow_ref.ends_with(".yaml")
        {
            return self.get(owner, repo, workflow_ref).await;
        }

        let listing = self.list(owner, repo).await?;
        listing
            .workflows
            .into_iter()
            .find(|w| w.name == workflow_ref)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "no workflow named '{}' in {}/{}",
                    workflow_ref, owner, repo
                ))
            })
    }

    /// Create a `workflow_dispatch` event for a workflow.
    ///
    /// The remote side gives no idempotency guarantee: every call creates a
    /// new run, and the response carries no identifier for it.
    pub async fn dispatch(
        &self,
        owner: &str,
        repo: &str,
        workflow_ref: &str,
        git_ref: &str,
        inputs: HashMap<String, String>,
    ) -> Result<()> {
        let body = DispatchEventRequest {
            git_ref: git_ref.to_string(),
            inputs,
        };
        self.client
            .post_no_content(
                &format!(
                    "repos/{}/{}/actions/workflows/{}/dispatches",
                    owner, repo, workflow_ref
                ),
                &body,
            )
            .await
    }
}
