//! Cache Module
//!
//! Provides in-memory key/value caching with per-entry TTL expiration
//! (lazy on access, active via the reaper) and change notifications.

mod entry;
mod handle;
mod notify;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry, EntryOptions};
pub use handle::Cache;
pub use notify::{CacheEvent, EventKind, Notifier};
pub use store::CacheStore;

// == Public Constants ==
/// TTL sentinel marking an entry that never expires.
pub const TTL_NEVER_EXPIRES: i64 = -1;
