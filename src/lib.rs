//! TTL Cache - an in-process key/value cache with bounded-lifetime entries
//!
//! Entries expire through two complementary strategies: lazily, when a read
//! observes an expired entry, and actively, when the background reaper
//! sweeps the store. Expiration is fixed or sliding per entry, with a `-1`
//! TTL sentinel for entries that never expire. Mutations can optionally
//! emit typed change notifications over a broadcast channel.
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use ttl_cache::{Cache, CacheConfig, EntryOptions};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let cache: Cache<i32> = Cache::new(CacheConfig::new().with_ttl_default(30_000));
//!
//! cache.put("abc", 123, &EntryOptions::new().ttl(10_000)).await;
//! assert_eq!(cache.get("abc").await, Some(123));
//!
//! cache.start_reaper_every(Duration::from_secs(1)).await;
//! // ...
//! cache.stop_reaper().await;
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod tasks;

pub use cache::{
    current_timestamp_ms, Cache, CacheEntry, CacheEvent, CacheStore, EntryOptions, EventKind,
    Notifier, TTL_NEVER_EXPIRES,
};
pub use config::CacheConfig;
pub use tasks::{Reaper, DEFAULT_REAPER_INTERVAL};
