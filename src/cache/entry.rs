//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and resolves the
//! per-entry expiration and notification policy at construction time.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::cache::TTL_NEVER_EXPIRES;
use crate::config::CacheConfig;

// == Entry Options ==
/// Per-put options for a single cache entry.
///
/// Every field is optional; absent fields fall back to the cache-wide
/// defaults during entry construction. Presence is checked explicitly, so
/// an explicit `ttl` of `0` is honored as an immediately-expiring lifetime
/// rather than being coerced to the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryOptions {
    /// TTL in milliseconds. `-1` means the entry never expires.
    pub ttl: Option<i64>,
    /// Sliding expiration: refresh the expiration clock on every read.
    pub keep_alive_on_access: Option<bool>,
    /// Override of the cache-wide change-notification default.
    pub emit_changes: Option<bool>,
}

impl EntryOptions {
    // == Constructor ==
    /// Creates empty options; every field resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry TTL in milliseconds (`-1` = never expires).
    pub fn ttl(mut self, ttl_ms: i64) -> Self {
        self.ttl = Some(ttl_ms);
        self
    }

    /// Sets whether reads refresh the expiration clock.
    pub fn keep_alive_on_access(mut self, keep_alive: bool) -> Self {
        self.keep_alive_on_access = Some(keep_alive);
        self
    }

    /// Overrides the cache-wide change-notification default.
    pub fn emit_changes(mut self, emit: bool) -> Self {
        self.emit_changes = Some(emit);
        self
    }
}

// == Cache Entry ==
/// A single cache entry with its payload and expiration metadata.
///
/// The expiration and notification policy is resolved once here and is
/// fixed for the entry's lifetime; changing the cache-wide defaults later
/// has no retroactive effect on existing entries.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored payload, never inspected by the cache itself
    pub data: T,
    /// TTL in milliseconds, `-1` = never expires
    pub ttl: i64,
    /// Absolute expiration time (Unix milliseconds); `None` iff `ttl == -1`
    pub expires_at: Option<i64>,
    /// Sliding (true) vs fixed (false) expiration
    pub keep_alive_on_access: bool,
    /// Whether mutations of this entry emit change notifications
    pub(crate) emit_changes: bool,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry, resolving all policy fields against the
    /// cache-wide defaults.
    ///
    /// Resolution rules:
    /// - `ttl`: entry option, else `config.ttl_default`, else `-1`
    /// - `keep_alive_on_access`: entry option, else `true`
    /// - `emit_changes`: entry option, else `config.emit_changes`
    ///
    /// Construction never fails; malformed options are impossible by type.
    pub fn new(data: T, options: &EntryOptions, config: &CacheConfig) -> Self {
        let ttl = options
            .ttl
            .or(config.ttl_default)
            .unwrap_or(TTL_NEVER_EXPIRES);

        let expires_at = if ttl == TTL_NEVER_EXPIRES {
            None
        } else {
            Some(current_timestamp_ms() + ttl)
        };

        Self {
            data,
            ttl,
            expires_at,
            keep_alive_on_access: options.keep_alive_on_access.unwrap_or(true),
            emit_changes: options.emit_changes.unwrap_or(config.emit_changes),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of now.
    ///
    /// Boundary condition: an entry is live while `now <= expires_at` and
    /// expired strictly after. Entries with `ttl == -1` never expire.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Checks whether the entry has expired at a given time.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        match self.expires_at {
            Some(expires) => now_ms > expires,
            None => false,
        }
    }

    // == Refresh ==
    /// Advances the expiration clock to `now + ttl` (sliding expiration).
    ///
    /// No-op for eternal entries.
    pub(crate) fn refresh(&mut self, now_ms: i64) {
        if self.ttl != TTL_NEVER_EXPIRES {
            self.expires_at = Some(now_ms + self.ttl);
        }
    }

    // == Time To Live ==
    /// Returns the remaining TTL in milliseconds, or `None` for eternal
    /// entries. Returns `Some(0)` once expired.
    pub fn ttl_remaining_ms(&self) -> Option<i64> {
        self.expires_at.map(|expires| {
            let now = current_timestamp_ms();
            if expires > now {
                expires - now
            } else {
                0
            }
        })
    }

    /// Whether this entry's mutations emit change notifications.
    pub fn emits_changes(&self) -> bool {
        self.emit_changes
    }
}

// == Utility Functions ==
/// Returns the current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as i64
}
