//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the cache.
//!
//! # Tasks
//! - Reaper: actively removes expired cache entries at a fixed interval,
//!   complementing the store's lazy on-access expiration.

mod reaper;

pub use reaper::{Reaper, DEFAULT_REAPER_INTERVAL};
