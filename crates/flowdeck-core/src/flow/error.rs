//! Flow error types.

use std::time::Duration;

use thiserror::Error;

/// Flow invocation errors.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A previous invocation is still in flight; this one was skipped.
    #[error("flow is already running")]
    AlreadyRunning,

    /// The trigger did not finish in time.
    #[error("flow timed out after {0:?}")]
    TimedOut(Duration),

    /// The trigger reported a failure.
    #[error("flow failed: {0}")]
    Failed(String),
}
