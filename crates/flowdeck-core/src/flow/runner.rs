//! Guarded, time-bounded flow invocation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};

use super::error::FlowError;
use super::trigger::FlowTrigger;

/// Default upper bound on a single flow invocation (5 minutes).
pub const DEFAULT_FLOW_TIMEOUT: Duration = Duration::from_secs(300);

/// Timestamps of a completed flow invocation.
#[derive(Debug, Clone, Copy)]
pub struct FlowRun {
    pub started_at: DateTime<Local>,
    pub completed_at: DateTime<Local>,
}

/// Runs a [`FlowTrigger`] at most once at a time, with a timeout.
///
/// Both the scheduler and the `/test` endpoint go through the same runner, so
/// an invocation arriving while another is in flight is skipped rather than
/// stacked behind it.
pub struct FlowRunner {
    trigger: Arc<dyn FlowTrigger>,
    timeout: Duration,
    running: AtomicBool,
}

/// Clears the in-flight flag when the invocation ends, including when its
/// future is dropped half-way.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl FlowRunner {
    /// Create a runner with the default timeout.
    pub fn new(trigger: Arc<dyn FlowTrigger>) -> Self {
        Self {
            trigger,
            timeout: DEFAULT_FLOW_TIMEOUT,
            running: AtomicBool::new(false),
        }
    }

    /// Set the per-invocation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an invocation is currently in flight.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Invoke the trigger once.
    pub async fn run(&self) -> Result<FlowRun, FlowError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FlowError::AlreadyRunning);
        }
        let _in_flight = InFlight(&self.running);

        let started_at = Local::now();
        tracing::info!(
            trigger = self.trigger.name(),
            started_at = %started_at.format("%Y-%m-%d %H:%M:%S"),
            "starting flow execution"
        );

        match tokio::time::timeout(self.timeout, self.trigger.execute()).await {
            Ok(Ok(())) => {
                let completed_at = Local::now();
                tracing::info!(
                    trigger = self.trigger.name(),
                    elapsed_ms = (completed_at - started_at).num_milliseconds(),
                    "flow execution completed"
                );
                Ok(FlowRun {
                    started_at,
                    completed_at,
                })
            }
            Ok(Err(e)) => {
                tracing::error!(trigger = self.trigger.name(), error = %e, "flow execution failed");
                Err(e)
            }
            Err(_) => {
                tracing::error!(
                    trigger = self.trigger.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "flow execution timed out"
                );
                Err(FlowError::TimedOut(self.timeout))
            }
        }
    }
}
