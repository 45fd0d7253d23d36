//! Typed API endpoint groups.

mod repos;
mod runs;
mod workflows;

pub use repos::ReposApi;
pub use runs::{ListRunsQuery, RunsApi};
pub use workflows::WorkflowsApi;
