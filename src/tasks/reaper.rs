//! Reaper Task Module
//!
//! Cancellable periodic timer bound to a store; repeatedly invokes the
//! store's sweep to actively remove expired entries.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Default sweep interval when `start` is called without one.
pub const DEFAULT_REAPER_INTERVAL: Duration = Duration::from_secs(10);

// == Reaper ==
/// Periodic sweep timer for a shared cache store.
///
/// The reaper is either idle (no task handle held) or active (a spawned
/// sweep loop is running). Starting while active cancels the previous loop
/// first, so two sweep loops never run concurrently; only the most recent
/// interval is honored.
#[derive(Debug)]
pub struct Reaper<T: Clone + Send + Sync + 'static> {
    /// The store this reaper sweeps
    store: Arc<RwLock<CacheStore<T>>>,
    /// Handle of the active sweep task, `None` when idle
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Clone + Send + Sync + 'static> Reaper<T> {
    // == Constructor ==
    /// Creates an idle reaper bound to `store`.
    pub fn new(store: Arc<RwLock<CacheStore<T>>>) -> Self {
        Self {
            store,
            handle: Mutex::new(None),
        }
    }

    // == Start ==
    /// Starts the periodic sweep loop.
    ///
    /// If a loop is already active it is stopped first, and its in-flight
    /// sweep (if any) is awaited, before the replacement is spawned.
    pub async fn start(&self, interval: Duration) {
        self.stop().await;

        let handle = spawn_sweep_task(self.store.clone(), interval);
        *self.handle.lock().unwrap() = Some(handle);
    }

    // == Stop ==
    /// Cancels the sweep loop and waits for the task to terminate.
    ///
    /// An in-flight sweep holds the store's write lock for its whole
    /// critical section, so it either completes fully or never starts;
    /// awaiting the aborted task ensures no sweep outlives this call.
    /// No-op when already idle.
    pub async fn stop(&self) {
        let handle = self.handle.lock().unwrap().take();
        if let Some(handle) = handle {
            handle.abort();
            let _ = handle.await;
        }
    }

    // == Is Active ==
    /// Returns true iff a sweep loop is currently scheduled.
    pub fn is_active(&self) -> bool {
        self.handle
            .lock()
            .unwrap()
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }
}

// == Sweep Task ==
/// Spawns the background task that periodically reaps expired entries.
///
/// The task sleeps for `interval` between sweeps; each sweep acquires the
/// store's write lock, removes expired entries and emits their delete
/// notifications before releasing it.
fn spawn_sweep_task<T: Clone + Send + Sync + 'static>(
    store: Arc<RwLock<CacheStore<T>>>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting reaper with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store = store.write().await;
                store.reap()
            };

            if removed > 0 {
                info!("Reaper removed {} expired entries", removed);
            } else {
                debug!("Reaper found no expired entries");
            }
        }
    })
}
