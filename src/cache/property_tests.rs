//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the structural invariants of the store: bounded
//! capacity, LRU eviction order, promotion on access, and statistics
//! accuracy over arbitrary operation sequences.

use proptest::prelude::*;

use std::collections::HashSet;
use std::time::Duration;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_CAPACITY: usize = 100;
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,32}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,128}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        8 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        8 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // After every operation the resident count stays within the bound, and
    // the recency order always covers exactly the resident key set.
    #[test]
    fn prop_capacity_invariant(ops in prop::collection::vec(cache_op_strategy(), 1..100)) {
        let capacity = 10;
        let mut store = CacheStore::new(capacity, TEST_TTL);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => store.put(key, value),
                CacheOp::Get { key } => { store.get(&key); }
                CacheOp::Clear => store.clear(),
            }
            prop_assert!(
                store.len() <= capacity,
                "resident count {} exceeds capacity {}",
                store.len(),
                capacity
            );
        }
    }

    // Storing then reading back (before expiration) returns the stored value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL);

        store.put(key.clone(), value.clone());

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // Overwriting a key yields the newer value without consuming capacity.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL);

        store.put(key.clone(), value1);
        store.put(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1);
        prop_assert_eq!(store.stats().evictions, 0);
    }

    // Filling a full cache with one more distinct key evicts exactly the
    // least recently used entry.
    #[test]
    fn prop_lru_eviction_order(
        initial_keys in prop::collection::vec(key_strategy(), 3..10),
        new_key in key_strategy(),
        new_value in value_strategy()
    ) {
        let unique_keys: Vec<String> = initial_keys
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 2);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = CacheStore::new(capacity, TEST_TTL);

        let oldest_key = unique_keys[0].clone();
        for key in &unique_keys {
            store.put(key.clone(), format!("value_{}", key));
        }
        prop_assert_eq!(store.len(), capacity);

        store.put(new_key.clone(), new_value);

        prop_assert_eq!(store.len(), capacity);
        prop_assert_eq!(store.get(&oldest_key), None);
        prop_assert!(store.get(&new_key).is_some());

        for key in unique_keys.iter().skip(1) {
            prop_assert!(store.get(key).is_some(), "key '{}' should have survived", key);
        }
    }

    // A get promotes its key out of the eviction slot; the next-oldest key
    // is evicted instead.
    #[test]
    fn prop_lru_access_tracking(
        keys in prop::collection::vec(key_strategy(), 3..8),
        new_key in key_strategy(),
        new_value in value_strategy()
    ) {
        let unique_keys: Vec<String> = keys
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 3);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = CacheStore::new(capacity, TEST_TTL);

        for key in &unique_keys {
            store.put(key.clone(), format!("value_{}", key));
        }

        let accessed_key = unique_keys[0].clone();
        let expected_evicted = unique_keys[1].clone();
        store.get(&accessed_key);

        store.put(new_key.clone(), new_value);

        prop_assert!(store.get(&accessed_key).is_some());
        prop_assert_eq!(store.get(&expected_evicted), None);
        prop_assert!(store.get(&new_key).is_some());
    }

    // Hit and miss counters reflect exactly the observed get outcomes.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => store.put(key, value),
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Clear => store.clear(),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, store.len());
    }

    // After clear, every previously present key is absent.
    #[test]
    fn prop_clear_forgets_everything(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..30)
    ) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL);

        for (key, value) in &entries {
            store.put(key.clone(), value.clone());
        }

        store.clear();

        prop_assert!(store.is_empty());
        for (key, _) in &entries {
            prop_assert_eq!(store.get(key), None);
        }
    }
}

// Concurrent access through the shared handle: arbitrary interleavings
// never break the capacity bound or corrupt the counters.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_concurrent_operation_correctness(
        operations in prop::collection::vec(cache_op_strategy(), 10..60)
    ) {
        use crate::cache::SharedCache;

        let capacity = 8;
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let cache = SharedCache::new(CacheStore::new(capacity, TEST_TTL));

            let mut handles = Vec::new();
            for op in operations {
                let cache = cache.clone();
                handles.push(tokio::spawn(async move {
                    match op {
                        CacheOp::Put { key, value } => cache.put(key, value).await,
                        CacheOp::Get { key } => { cache.get(&key).await; }
                        CacheOp::Clear => cache.clear().await,
                    }
                }));
            }

            for handle in handles {
                handle.await.expect("task should not panic");
            }

            let stats = cache.stats().await;
            prop_assert!(cache.len().await <= capacity);
            prop_assert!(stats.total_entries <= capacity);

            let hit_rate = stats.hit_rate();
            prop_assert!((0.0..=1.0).contains(&hit_rate));

            Ok(())
        })?;
    }
}
