//! Background polling refresh
//!
//! Screens that mirror backend state refresh on a fixed interval. Each
//! refresher owns one store and one fetch closure; a stop handle cancels
//! the loop. A fetch that completes after the refresher was stopped is
//! discarded instead of overwriting the store, so a stale in-flight
//! response never clobbers newer local state.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::Result;
use crate::store::{EntityStore, Record};

/// Handle to a running refresh loop. Dropping the handle does not stop
/// the loop; call [`stop`](RefreshHandle::stop).
pub struct RefreshHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Signal the loop to stop. In-flight fetches finish but their
    /// results are discarded.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.stop_tx.borrow()
    }

    /// Stop and wait for the loop task to exit.
    pub async fn shutdown(self) {
        self.stop();
        let _ = self.task.await;
    }
}

/// Spawn a refresh loop that replaces the store contents with each
/// successful fetch. The first tick fires immediately.
pub fn spawn_refresh<R, F, Fut>(
    store: Arc<RwLock<EntityStore<R>>>,
    interval: Duration,
    fetch: F,
) -> RefreshHandle
where
    R: Record + Send + Sync + 'static,
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Vec<R>>> + Send,
{
    let (stop_tx, stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut timer = tokio::time::interval(interval);
        timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut stop = stop_rx;

        loop {
            tokio::select! {
                _ = timer.tick() => {}
                _ = stop.changed() => {
                    if *stop.borrow() {
                        debug!("Refresh loop stopped");
                        return;
                    }
                    continue;
                }
            }

            let result = fetch().await;

            // The stop signal may have arrived while the fetch was in
            // flight. Check again before touching the store.
            if *stop.borrow() {
                debug!("Discarding fetch result after stop");
                return;
            }

            match result {
                Ok(records) => {
                    debug!(count = records.len(), "Refresh applied");
                    store.write().replace_all(records);
                }
                Err(e) => {
                    // Keep the last good data and try again next tick
                    warn!(error = %e, "Refresh fetch failed");
                }
            }
        }
    });

    RefreshHandle { stop_tx, task }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
