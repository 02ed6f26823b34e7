//! Periodic background sweep
//!
//! A sweep task runs on a fixed period until its [`SweepHandle`] is stopped
//! or dropped.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Handle to a running sweep task
///
/// Dropping the handle cancels the task without waiting for it.
#[derive(Debug)]
pub struct SweepHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
    interval: Duration,
}

impl SweepHandle {
    /// Spawn `tick` every `interval`, first run one interval from now
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(name: &'static str, interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let token = CancellationToken::new();
        let child = token.child_token();

        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    () = child.cancelled() => break,
                    _ = ticker.tick() => tick(),
                }
            }
            debug!(task = name, "Sweep task stopped");
        });

        debug!(task = name, ?interval, "Sweep task started");

        Self {
            token,
            task: Some(task),
            interval,
        }
    }

    /// Period between runs
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the task is still scheduled
    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled() && self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel the task and wait for it to finish its current run
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("Sweep task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
