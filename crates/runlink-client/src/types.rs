//! Request and response types for the GitHub Actions API.
//!
//! These types mirror the wire contract; status and conclusion are kept as
//! raw strings here and classified by the engine.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Workflows
// ─────────────────────────────────────────────────────────────────────────────

/// A workflow definition registered in a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    /// Platform-assigned workflow id.
    pub id: u64,
    /// Display name from the workflow file.
    pub name: String,
    /// Path of the workflow file in the repository.
    pub path: String,
    /// Workflow state (active, disabled, ...).
    #[serde(default)]
    pub state: Option<String>,
}

/// Response for listing a repository's workflows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWorkflowsResponse {
    /// Total number of workflows.
    pub total_count: u64,
    /// Workflows on this page.
    pub workflows: Vec<Workflow>,
}

/// Body of a `workflow_dispatch` event creation request.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchEventRequest {
    /// Git reference (branch or tag) to run the workflow on.
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Inputs forwarded to the workflow.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub inputs: HashMap<String, String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Runs
// ─────────────────────────────────────────────────────────────────────────────

/// The user that triggered a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Account login.
    pub login: String,
}

/// One execution instance of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Platform-assigned run id.
    pub id: u64,
    /// Browser URL for the run.
    pub html_url: String,
    /// Lifecycle status (queued, in_progress, completed, ...).
    pub status: String,
    /// Terminal outcome, present once the run completes.
    #[serde(default)]
    pub conclusion: Option<String>,
    /// Branch the run executes on.
    pub head_branch: String,
    /// When the run was created.
    pub created_at: DateTime<Utc>,
    /// User that triggered the run.
    pub actor: Actor,
}

/// Response for listing a workflow's runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRunsResponse {
    /// Total number of matching runs.
    pub total_count: u64,
    /// Runs on this page.
    pub workflow_runs: Vec<WorkflowRun>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Repositories
// ─────────────────────────────────────────────────────────────────────────────

/// Repository metadata (the subset runlink reads).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Default branch name.
    pub default_branch: String,
}
