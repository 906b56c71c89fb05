//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with lazy (on-access) and
//! active (reaper-driven) TTL expiration, plus change notifications.

use std::collections::HashMap;

use tokio::sync::broadcast;
use tracing::debug;

use crate::cache::{
    current_timestamp_ms, CacheEntry, CacheEvent, EntryOptions, EventKind, Notifier,
    TTL_NEVER_EXPIRES,
};
use crate::config::CacheConfig;

// == Cache Store ==
/// Main cache storage with per-entry TTL expiration.
///
/// The store assumes a single logical owner; concurrent access is provided
/// by the [`Cache`](crate::cache::Cache) handle, which serializes every
/// operation through a lock.
#[derive(Debug)]
pub struct CacheStore<T: Clone> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Cache-wide defaults applied at entry construction
    config: CacheConfig,
    /// Change-notification fan-out
    notifier: Notifier<T>,
}

impl<T: Clone> CacheStore<T> {
    // == Constructor ==
    /// Creates a new empty store with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        let notifier = Notifier::new(config.event_capacity);
        Self {
            entries: HashMap::new(),
            config,
            notifier,
        }
    }

    // == Put ==
    /// Stores a key-value pair, replacing any previous entry under `key`.
    ///
    /// A fresh entry is always constructed; the previous entry (if any) is
    /// simply dropped. Emits a `Put` notification when the entry's resolved
    /// `emit_changes` is true.
    pub fn put(&mut self, key: impl Into<String>, data: T, options: &EntryOptions) {
        let key = key.into();
        let entry = CacheEntry::new(data, options, &self.config);

        debug!("Cached entry {} with TTL {}", key, entry.ttl);

        if entry.emit_changes {
            self.notifier.publish(EventKind::Put, &key, entry.data.clone());
        }

        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Retrieves a value by key, applying the entry's expiration policy.
    ///
    /// - Eternal entries (`ttl == -1`) are returned without any check.
    /// - Sliding entries are unconditionally renewed to `now + ttl` and
    ///   returned, even if technically past expiry at the instant of the
    ///   call (last-observed-wins).
    /// - Fixed entries are returned while `now <= expires_at`.
    /// - Otherwise the entry has expired: it is removed and `None` is
    ///   returned. Lazy removal emits no delete notification; only `reap`
    ///   and explicit `delete` do.
    pub fn get(&mut self, key: &str) -> Option<T> {
        let entry = self.entries.get_mut(key)?;
        let now = current_timestamp_ms();

        if entry.ttl == TTL_NEVER_EXPIRES {
            // This entry never expires
            debug!("Found cache entry for {}", key);
            Some(entry.data.clone())
        } else if entry.keep_alive_on_access {
            entry.refresh(now);
            debug!("Found cache entry for {}", key);
            Some(entry.data.clone())
        } else if !entry.is_expired_at(now) {
            debug!("Found cache entry for {}", key);
            Some(entry.data.clone())
        } else {
            debug!("Removing expired entry {}", key);
            self.entries.remove(key);
            None
        }
    }

    // == Get Entry ==
    /// Raw lookup bypassing all expiration logic.
    ///
    /// Does not remove expired entries and does not refresh sliding ones;
    /// intended for inspection.
    pub fn get_entry(&self, key: &str) -> Option<&CacheEntry<T>> {
        self.entries.get(key)
    }

    // == Delete ==
    /// Unconditionally removes `key` if present.
    ///
    /// Emits a `Delete` notification with the removed entry's data when
    /// that entry's `emit_changes` resolved to true. No-op, and no
    /// notification, when the key is absent.
    pub fn delete(&mut self, key: &str) {
        if let Some(entry) = self.entries.remove(key) {
            if entry.emit_changes {
                self.notifier.publish(EventKind::Delete, key, entry.data);
            }
        }
    }

    // == Reap ==
    /// Removes every expired entry, emitting `Delete` notifications for
    /// those whose `emit_changes` resolved to true.
    ///
    /// Entries with `ttl == -1` are never swept. Returns the number of
    /// entries removed.
    pub fn reap(&mut self) -> usize {
        let now = current_timestamp_ms();

        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.ttl != TTL_NEVER_EXPIRES && entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            debug!("Removing expired entry {}", key);
            if let Some(entry) = self.entries.remove(&key) {
                if entry.emit_changes {
                    self.notifier.publish(EventKind::Delete, &key, entry.data);
                }
            }
        }

        count
    }

    // == Subscribe ==
    /// Registers a subscriber for change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent<T>> {
        self.notifier.subscribe()
    }

    // == Length ==
    /// Returns the current number of entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
