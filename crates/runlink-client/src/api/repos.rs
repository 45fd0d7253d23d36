//! Repositories API.

use crate::client::GithubClient;
use crate::error::Result;
use crate::types::Repository;

/// Repositories API client.
pub struct ReposApi {
    client: GithubClient,
}

impl ReposApi {
    pub(crate) fn new(client: GithubClient) -> Self {
        Self { client }
    }

    /// Get repository metadata (used to resolve the default branch).
    pub async fn get(&self, owner: &str, repo: &str) -> Result<Repository> {
        self.client.get(&format!("repos/{}/{}", owner, repo)).await
    }
}
