//! runlink - trigger a workflow run in a remote repository and await its
//! outcome.
//!
//! Main entry point for the runlink CLI.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use tracing::info;

use runlink_client::GithubClient;
use runlink_core::{
    CompletionConfig, DiscoveryConfig, DispatchRequest, EngineError, Orchestrator,
    OrchestratorConfig, parse_duration,
};

mod outputs;

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Trigger a workflow run in a remote repository and await its outcome.
#[derive(Parser, Debug)]
#[command(name = "runlink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workflow to trigger: display name, filename, or numeric id
    #[arg(long)]
    pub workflow: String,

    /// API token used for the dispatch and for polling
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Target repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: String,

    /// Git reference to run on (the repository's default branch if unset)
    #[arg(long = "ref")]
    pub git_ref: Option<String>,

    /// Login of the dispatching user, used to correlate the created run
    #[arg(long, env = "GITHUB_ACTOR")]
    pub actor: String,

    /// Workflow inputs as a JSON object of string values
    #[arg(long, default_value = "{}")]
    pub inputs: String,

    /// Track the run until it completes and fail with it
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub wait_for_completion: bool,

    /// Budget for completion tracking
    #[arg(long, default_value = "1h")]
    pub wait_for_completion_timeout: String,

    /// Delay between completion polls
    #[arg(long, default_value = "1m")]
    pub wait_for_completion_interval: String,

    /// Surface the triggered run's URL as an output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub display_workflow_run_url: bool,

    /// Budget for finding the run URL
    #[arg(long, default_value = "10m")]
    pub display_workflow_run_url_timeout: String,

    /// Delay between URL discovery polls
    #[arg(long, default_value = "1m")]
    pub display_workflow_run_url_interval: String,

    /// API base URL (override for GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Fail fast on malformed config before touching the network.
    let config = invocation_config(&cli)?;
    let (owner, repo) = split_repo(&cli.repo)?;
    let inputs: HashMap<String, String> = serde_json::from_str(&cli.inputs)
        .context("--inputs must be a JSON object mapping strings to strings")?;

    let client = GithubClient::builder()
        .base_url(&cli.api_url)
        .token(&cli.token)
        .build()?;

    // The dispatch endpoint only accepts a filename or numeric id, so
    // resolve display names up front.
    let workflow = client
        .workflows()
        .resolve(&owner, &repo, &cli.workflow)
        .await
        .map_err(EngineError::Transport)?;
    info!(name = %workflow.name, id = workflow.id, "resolved workflow");

    let git_ref = match cli.git_ref {
        Some(git_ref) => git_ref,
        None => {
            client
                .repos()
                .get(&owner, &repo)
                .await
                .map_err(EngineError::Transport)?
                .default_branch
        }
    };

    let request = DispatchRequest::new(
        workflow.id.to_string(),
        owner,
        repo,
        git_ref,
        cli.actor,
        inputs,
    );
    let orchestrator = Orchestrator::new(client, config);
    let result = orchestrator.run(&request).await?;

    let output_file = std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from);
    outputs::write(&result, output_file.as_deref())?;

    result.ensure_success()?;
    Ok(())
}

/// Initialize tracing on stderr; stdout is reserved for outputs.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "runlink=debug,runlink_core=debug,runlink_client=debug,info"
    } else {
        "runlink=info,runlink_core=info,runlink_client=info,warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Validate interval/timeout strings and assemble the engine configuration.
fn invocation_config(cli: &Cli) -> Result<OrchestratorConfig, EngineError> {
    Ok(OrchestratorConfig {
        wait_for_completion: cli.wait_for_completion,
        completion: CompletionConfig {
            timeout: parse_duration(&cli.wait_for_completion_timeout)?,
            interval: parse_duration(&cli.wait_for_completion_interval)?,
        },
        discovery: DiscoveryConfig {
            enabled: cli.display_workflow_run_url,
            timeout: parse_duration(&cli.display_workflow_run_url_timeout)?,
            interval: parse_duration(&cli.display_workflow_run_url_interval)?,
        },
    })
}

/// Split an `owner/name` repository slug.
fn split_repo(slug: &str) -> Result<(String, String)> {
    match slug.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => bail!("--repo must be of the form owner/name, got '{slug}'"),
    }
}
