//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache's core correctness properties over
//! generated operation sequences and option combinations.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStore, EntryOptions, EventKind, TTL_NEVER_EXPIRES};
use crate::config::CacheConfig;

// == Strategies ==
/// Generates cache keys from a small alphabet so op sequences collide
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e][0-9]".prop_map(|s| s)
}

/// Generates per-entry TTL options: absent, eternal, or a long finite TTL
/// (long enough that nothing expires within a test run)
fn ttl_strategy() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![
        Just(None),
        Just(Some(TTL_NEVER_EXPIRES)),
        (60_000i64..3_600_000).prop_map(Some),
    ]
}

/// A sequence of cache operations for model-based testing
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: u32, ttl: Option<i64> },
    Get { key: String },
    Delete { key: String },
    Reap,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), any::<u32>(), ttl_strategy())
            .prop_map(|(key, value, ttl)| CacheOp::Put { key, value, ttl }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
        Just(CacheOp::Reap),
    ]
}

fn apply_ttl(options: EntryOptions, ttl: Option<i64>) -> EntryOptions {
    match ttl {
        Some(ttl) => options.ttl(ttl),
        None => options,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations whose TTLs cannot elapse during the
    // run, the store behaves exactly like a plain map: get returns what
    // the model holds, and reap removes nothing.
    #[test]
    fn prop_store_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store: CacheStore<u32> = CacheStore::new(CacheConfig::default());
        let mut model: HashMap<String, u32> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Put { key, value, ttl } => {
                    store.put(key.clone(), value, &apply_ttl(EntryOptions::new(), ttl));
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).copied());
                }
                CacheOp::Delete { key } => {
                    store.delete(&key);
                    model.remove(&key);
                }
                CacheOp::Reap => {
                    prop_assert_eq!(store.reap(), 0, "Nothing should expire mid-run");
                }
            }
        }

        prop_assert_eq!(store.len(), model.len(), "Entry count diverged from model");
    }

    // Invariant: an entry has an expiration timestamp iff its TTL is not
    // the never-expires sentinel.
    #[test]
    fn prop_expiration_presence_matches_ttl(
        ttl in ttl_strategy(),
        ttl_default in ttl_strategy(),
    ) {
        let mut config = CacheConfig::default();
        config.ttl_default = ttl_default;

        let entry = CacheEntry::new(0u32, &apply_ttl(EntryOptions::new(), ttl), &config);

        prop_assert_eq!(
            entry.expires_at.is_none(),
            entry.ttl == TTL_NEVER_EXPIRES,
            "expires_at presence must mirror the TTL sentinel"
        );
        prop_assert_eq!(entry.ttl, ttl.or(ttl_default).unwrap_or(TTL_NEVER_EXPIRES));
    }

    // The per-entry emit override, when set, always beats the cache-wide
    // default; otherwise the default applies.
    #[test]
    fn prop_emit_resolution_precedence(
        entry_override in prop::option::of(any::<bool>()),
        cache_default in any::<bool>(),
    ) {
        let config = CacheConfig::default().with_emit_changes(cache_default);
        let mut options = EntryOptions::new();
        options.emit_changes = entry_override;

        let entry = CacheEntry::new(0u32, &options, &config);

        prop_assert_eq!(entry.emits_changes(), entry_override.unwrap_or(cache_default));
    }

    // Deleting keys that were never inserted emits no notifications,
    // regardless of the cache-wide default.
    #[test]
    fn prop_noop_deletes_emit_nothing(
        keys in prop::collection::vec(key_strategy(), 1..20),
        cache_default in any::<bool>(),
    ) {
        let mut store: CacheStore<u32> =
            CacheStore::new(CacheConfig::default().with_emit_changes(cache_default));
        let mut rx = store.subscribe();

        for key in keys {
            store.delete(&key);
        }

        prop_assert!(rx.try_recv().is_err(), "No-op deletes must be silent");
    }

    // Every put on an emitting cache produces exactly one Put event
    // carrying the key and data, in operation order.
    #[test]
    fn prop_puts_emit_in_order(
        puts in prop::collection::vec((key_strategy(), any::<u32>()), 1..10),
    ) {
        let mut store: CacheStore<u32> =
            CacheStore::new(CacheConfig::default().with_emit_changes(true));
        let mut rx = store.subscribe();

        for (key, value) in &puts {
            store.put(key.clone(), *value, &EntryOptions::new());
        }

        for (key, value) in &puts {
            let event = rx.try_recv().expect("Missing put event");
            prop_assert_eq!(event.kind, EventKind::Put);
            prop_assert_eq!(&event.key, key);
            prop_assert_eq!(&event.data, value);
        }
        prop_assert!(rx.try_recv().is_err(), "Unexpected extra event");
    }
}
