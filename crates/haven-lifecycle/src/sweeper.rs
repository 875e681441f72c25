//! Recurring sweep task.

use crate::manager::TemporaryAccessManager;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running sweeper task.
///
/// Stopping (or dropping) the handle halts future ticks; a tick already
/// executing runs to completion.
pub struct SweeperHandle {
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl SweeperHandle {
    /// Signal the sweeper to stop after any tick currently in flight.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Stop the sweeper and wait for the task to finish.
    pub async fn stopped(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

impl TemporaryAccessManager {
    /// Spawn the recurring sweep on the current tokio runtime.
    ///
    /// The first sweep runs one interval after start, matching the fixed
    /// 60-second cadence; tick failures are logged and the next tick retries
    /// independently, with no backoff.
    pub fn start_sweeper(self: &Arc<Self>) -> SweeperHandle {
        let manager = Arc::clone(self);
        let (shutdown, mut rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(manager.sweep_interval());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval() yields immediately on the first tick; consume it so
            // the schedule starts one interval from now.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match manager.sweep().await {
                            Ok(0) => {}
                            Ok(removed) => {
                                tracing::debug!(removed, "sweep tick removed expired identities");
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "sweep tick failed; retrying next interval");
                            }
                        }
                    }
                    _ = rx.changed() => break,
                }
            }
        });

        SweeperHandle {
            shutdown,
            task: Some(task),
        }
    }
}
