//! Dispatch-and-await engine for remote workflow runs.
//!
//! The trigger API for `workflow_dispatch` events returns no identifier for
//! the run it creates. This crate fires the dispatch, correlates the new run
//! among ambiguous candidates (actor + branch + creation-time window), and
//! drives two independent polling state machines: one that surfaces the run's
//! URL early (best-effort) and one that waits for the run to reach a terminal
//! state within a configurable budget.

pub mod completion;
pub mod correlate;
pub mod discovery;
pub mod duration;
pub mod error;
pub mod orchestrate;
pub mod source;
pub mod types;

pub use completion::{CompletionConfig, CompletionOutcome, await_completion};
pub use correlate::{correlate_once, select_run};
pub use discovery::{DiscoveryConfig, discover_run_url};
pub use duration::{DurationError, format_duration, parse_duration};
pub use error::{EngineError, Result};
pub use orchestrate::{Orchestrator, OrchestratorConfig};
pub use source::RunSource;
pub use types::{
    CandidateRun, Conclusion, CorrelatedRun, DispatchRequest, InvocationResult, PollOutcome,
    RunStatus,
};

#[cfg(test)]
pub(crate) mod testing;
