//! Periodic flow scheduling.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::sync::broadcast;
use tokio::time::{Instant, MissedTickBehavior};

use super::error::FlowError;
use super::runner::FlowRunner;

/// Default cadence: once a minute.
pub const DEFAULT_FLOW_INTERVAL: Duration = Duration::from_secs(60);

/// Time from `since_epoch` until the next whole multiple of `period`.
///
/// With a one-minute period ticks land on the minute, like a
/// `minute='*'` cron entry. Never returns zero: a time exactly on a boundary
/// waits a full period.
pub fn delay_until_next_tick(since_epoch: Duration, period: Duration) -> Duration {
    let period_ms = period.as_millis().max(1);
    let into_period = since_epoch.as_millis() % period_ms;
    Duration::from_millis((period_ms - into_period) as u64)
}

/// Invokes a [`FlowRunner`] on a fixed, wall-clock aligned cadence.
pub struct FlowScheduler {
    runner: Arc<FlowRunner>,
    period: Duration,
}

impl FlowScheduler {
    /// Create a scheduler with the given period (at least one millisecond).
    pub fn new(runner: Arc<FlowRunner>, period: Duration) -> Self {
        Self {
            runner,
            period: period.max(Duration::from_millis(1)),
        }
    }

    /// Run until `shutdown` fires.
    ///
    /// Each tick spawns its own invocation so a slow flow never delays the
    /// ticker. Overlap is handled by the runner's in-flight guard, and errors
    /// are logged without stopping the loop.
    pub async fn run_until_shutdown(self, mut shutdown: broadcast::Receiver<()>) {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let first_tick = Instant::now() + delay_until_next_tick(since_epoch, self.period);

        let mut ticker = tokio::time::interval_at(first_tick, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            period_secs = self.period.as_secs_f64(),
            "flow scheduler started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let runner = self.runner.clone();
                    tokio::spawn(async move {
                        // Other failures are logged by the runner.
                        if let Err(FlowError::AlreadyRunning) = runner.run().await {
                            tracing::warn!("previous flow still running, skipping scheduled run");
                        }
                    });
                }
                _ = shutdown.recv() => {
                    tracing::info!("flow scheduler stopping");
                    break;
                }
            }
        }
    }
}
