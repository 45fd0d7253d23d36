//! HTTP client for the GitHub Actions workflow API.
//!
//! This crate provides the typed subset of the Actions REST API that runlink
//! needs: creating `workflow_dispatch` events, listing a workflow's runs with
//! actor/branch/created filters, and fetching a single run.
//!
//! # Example
//!
//! ```no_run
//! use runlink_client::GithubClient;
//!
//! # async fn example() -> runlink_client::Result<()> {
//! let client = GithubClient::builder()
//!     .token("ghp_secret")
//!     .build()?;
//!
//! let workflow = client.workflows().resolve("acme", "widgets", "deploy.yml").await?;
//! println!("dispatching {}", workflow.name);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, GithubClient};
pub use error::{Error, Result};
pub use types::*;

pub use api::ListRunsQuery;
