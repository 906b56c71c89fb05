//! Configuration Module
//!
//! Cache-wide construction options and their defaults.

use serde::{Deserialize, Serialize};

/// Cache-wide configuration.
///
/// All values are optional at the call site; `Default` yields a cache with
/// no default TTL (entries without an explicit TTL are eternal), silent
/// change notifications, and a small notification buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Default TTL in milliseconds applied when a put omits one.
    /// `None` means entries without an explicit TTL never expire.
    pub ttl_default: Option<i64>,
    /// Cache-wide default for change notifications.
    pub emit_changes: bool,
    /// Capacity of the broadcast buffer for change notifications.
    pub event_capacity: usize,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cache-wide default TTL in milliseconds.
    pub fn with_ttl_default(mut self, ttl_ms: i64) -> Self {
        self.ttl_default = Some(ttl_ms);
        self
    }

    /// Sets the cache-wide change-notification default.
    pub fn with_emit_changes(mut self, emit: bool) -> Self {
        self.emit_changes = emit;
        self
    }

    /// Sets the notification buffer capacity.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_default: None,
            emit_changes: false,
            event_capacity: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl_default, None);
        assert!(!config.emit_changes);
        assert_eq!(config.event_capacity, 16);
    }

    #[test]
    fn test_config_setters() {
        let config = CacheConfig::new()
            .with_ttl_default(30_000)
            .with_emit_changes(true)
            .with_event_capacity(64);

        assert_eq!(config.ttl_default, Some(30_000));
        assert!(config.emit_changes);
        assert_eq!(config.event_capacity, 64);
    }
}
