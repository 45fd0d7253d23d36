//! Invocation orchestrator.
//!
//! Composes dispatch, URL discovery, and completion tracking into one
//! stateless invocation: fire the event, surface the run URL best-effort,
//! then wait for the run's terminal state if asked to.

use tracing::info;

use crate::completion::{CompletionConfig, CompletionOutcome, await_completion};
use crate::discovery::{DiscoveryConfig, discover_run_url};
use crate::error::Result;
use crate::source::RunSource;
use crate::types::{DispatchRequest, InvocationResult, PollOutcome};

/// Configuration for one invocation.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Whether to track the run to completion. When off, the invocation is
    /// fire-and-forget and always passes.
    pub wait_for_completion: bool,
    /// Completion loop settings.
    pub completion: CompletionConfig,
    /// URL discovery loop settings.
    pub discovery: DiscoveryConfig,
}

impl OrchestratorConfig {
    /// Defaults matching the documented interface: wait for completion with
    /// a 1h budget, discover the URL with a 10m budget, 1m intervals.
    pub fn new() -> Self {
        Self {
            wait_for_completion: true,
            completion: CompletionConfig::default(),
            discovery: DiscoveryConfig::default(),
        }
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one dispatch-and-await invocation.
pub struct Orchestrator<S> {
    source: S,
    config: OrchestratorConfig,
}

impl<S: RunSource> Orchestrator<S> {
    /// Create an orchestrator over a run source.
    pub fn new(source: S, config: OrchestratorConfig) -> Self {
        Self { source, config }
    }

    /// Run the invocation: dispatch once, then poll per configuration.
    ///
    /// The dispatch request's timestamp is the causal floor for all polls,
    /// so it must be constructed immediately before this call.
    pub async fn run(&self, request: &DispatchRequest) -> Result<InvocationResult> {
        self.source.dispatch(request).await?;
        info!(
            workflow = %request.workflow_ref,
            git_ref = %request.git_ref,
            repo = %format!("{}/{}", request.owner, request.repo),
            "workflow dispatch event created"
        );

        let mut workflow_url = None;
        let mut pinned = None;
        if let PollOutcome::Found(run) =
            discover_run_url(&self.source, request, &self.config.discovery).await
        {
            workflow_url = Some(run.html_url.clone());
            pinned = Some(run);
        }

        if !self.config.wait_for_completion {
            return Ok(InvocationResult {
                workflow_url,
                conclusion: None,
                succeeded: true,
            });
        }

        let outcome =
            await_completion(&self.source, request, pinned, &self.config.completion).await?;
        Ok(match outcome {
            CompletionOutcome::Succeeded(conclusion) => InvocationResult {
                workflow_url,
                conclusion: Some(conclusion),
                succeeded: true,
            },
            CompletionOutcome::Failed(conclusion) => InvocationResult {
                workflow_url,
                conclusion: Some(conclusion),
                succeeded: false,
            },
            CompletionOutcome::TimedOut => InvocationResult {
                workflow_url,
                conclusion: None,
                succeeded: false,
            },
        })
    }
}
