//! Cache Handle Module
//!
//! Thread-safe, cloneable front door to a cache store. All operations are
//! serialized through a single `RwLock`, so removal and notification of an
//! entry are atomic from any observer's perspective, and the reaper's
//! sweeps interleave with direct calls only at lock boundaries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, RwLock};

use crate::cache::{CacheEntry, CacheEvent, CacheStore, EntryOptions};
use crate::config::CacheConfig;
use crate::tasks::{Reaper, DEFAULT_REAPER_INTERVAL};

// == Cache ==
/// Shared handle to a TTL cache.
///
/// Cloning the handle is cheap and yields another reference to the same
/// underlying store and reaper.
#[derive(Debug)]
pub struct Cache<T: Clone + Send + Sync + 'static> {
    store: Arc<RwLock<CacheStore<T>>>,
    reaper: Arc<Reaper<T>>,
}

impl<T: Clone + Send + Sync + 'static> Clone for Cache<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            reaper: self.reaper.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Cache<T> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<T: Clone + Send + Sync + 'static> Cache<T> {
    // == Constructor ==
    /// Creates a new cache with the given configuration. The reaper starts
    /// idle; call [`start_reaper`](Self::start_reaper) to enable active
    /// sweeping.
    pub fn new(config: CacheConfig) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(config)));
        let reaper = Arc::new(Reaper::new(store.clone()));
        Self { store, reaper }
    }

    // == Put ==
    /// Stores a key-value pair, replacing any previous entry under `key`.
    pub async fn put(&self, key: impl Into<String>, data: T, options: &EntryOptions) {
        self.store.write().await.put(key, data, options);
    }

    // == Get ==
    /// Retrieves a value by key, applying the entry's expiration policy
    /// (see [`CacheStore::get`]).
    pub async fn get(&self, key: &str) -> Option<T> {
        self.store.write().await.get(key)
    }

    // == Get Entry ==
    /// Returns a snapshot of the raw entry under `key`, bypassing all
    /// expiration logic.
    pub async fn get_entry(&self, key: &str) -> Option<CacheEntry<T>> {
        self.store.read().await.get_entry(key).cloned()
    }

    // == Delete ==
    /// Unconditionally removes `key` if present.
    pub async fn delete(&self, key: &str) {
        self.store.write().await.delete(key);
    }

    // == Reap ==
    /// Sweeps expired entries once; returns the number removed.
    pub async fn reap(&self) -> usize {
        self.store.write().await.reap()
    }

    // == Reaper Control ==
    /// Starts the background reaper with the default 10 second interval.
    /// Restarting replaces any active schedule.
    pub async fn start_reaper(&self) {
        self.reaper.start(DEFAULT_REAPER_INTERVAL).await;
    }

    /// Starts the background reaper with a custom sweep interval.
    pub async fn start_reaper_every(&self, interval: Duration) {
        self.reaper.start(interval).await;
    }

    /// Stops the background reaper; no-op when idle.
    pub async fn stop_reaper(&self) {
        self.reaper.stop().await;
    }

    /// Returns true iff the background reaper is scheduled.
    pub fn is_reaper_active(&self) -> bool {
        self.reaper.is_active()
    }

    // == Subscribe ==
    /// Registers a subscriber for change notifications.
    pub async fn subscribe(&self) -> broadcast::Receiver<CacheEvent<T>> {
        self.store.read().await.subscribe()
    }

    // == Length ==
    /// Returns the current number of entries, expired or not.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}
