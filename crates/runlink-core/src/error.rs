//! Engine error taxonomy.

use thiserror::Error;

use crate::duration::DurationError;
use crate::types::Conclusion;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that fail an invocation.
///
/// Correlation timing out is deliberately absent: the URL discovery loop
/// degrades to an absent URL instead of erroring.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed interval/timeout string; surfaced before any network call.
    #[error(transparent)]
    InvalidDuration(#[from] DurationError),

    /// The remote client failed (connectivity, auth, rate limit).
    #[error("transport error: {0}")]
    Transport(#[from] runlink_client::Error),

    /// The completion loop exhausted its budget without a terminal state.
    #[error("workflow run did not reach a terminal state within the configured timeout")]
    CompletionTimeout,

    /// The run reached a failing terminal conclusion.
    #[error("workflow run concluded with '{conclusion}'")]
    WorkflowFailed {
        /// The failing conclusion.
        conclusion: Conclusion,
    },
}
