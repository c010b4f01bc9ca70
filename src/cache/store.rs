//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with arena-based LRU
//! tracking and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::lru::LruList;
use crate::cache::{CacheEntry, CacheStats};

/// A resident entry plus its node in the recency order.
#[derive(Debug)]
struct Resident<V> {
    entry: CacheEntry<V>,
    node: usize,
}

// == Cache Store ==
/// Bounded key -> value cache with LRU eviction and per-entry TTL.
///
/// Holds at most `max_capacity` entries, each valid for `ttl` from its last
/// write. Lookups promote live entries to most-recently-used and lazily
/// purge expired ones. Absence is the only negative outcome; no operation
/// fails or performs I/O.
///
/// The store is single-threaded (`&mut self`); wrap it in
/// [`SharedCache`](crate::cache::SharedCache) for concurrent use.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage, each entry pointing at its LRU node
    entries: HashMap<String, Resident<V>>,
    /// Recency order over resident keys
    lru: LruList,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of resident entries
    max_capacity: usize,
    /// Validity window measured from an entry's last write
    ttl: Duration,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new store with the given capacity bound and TTL.
    ///
    /// A `max_capacity` of zero is legal: every insert is immediately
    /// evicted again, so the store never retains anything.
    pub fn new(max_capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruList::new(),
            stats: CacheStats::new(),
            max_capacity,
            ttl,
        }
    }

    // == Put ==
    /// Stores a value under `key`.
    ///
    /// Overwriting an existing key refreshes its value and write timestamp
    /// and promotes it, without consuming capacity. Inserting a new key may
    /// evict exactly one least-recently-used entry to stay within bounds.
    pub fn put(&mut self, key: String, value: V) {
        if let Some(resident) = self.entries.get_mut(&key) {
            // Overwrite: refresh value + timestamp, promote, done.
            resident.entry = CacheEntry::new(value);
            let node = resident.node;
            self.lru.move_to_front(node);
            return;
        }

        let node = self.lru.push_front(key.clone());
        self.entries.insert(
            key,
            Resident {
                entry: CacheEntry::new(value),
                node,
            },
        );

        // Each insert adds one entry, so one eviction restores the bound.
        while self.entries.len() > self.max_capacity {
            match self.lru.pop_back() {
                Some(evicted) => {
                    self.entries.remove(&evicted);
                    self.stats.record_eviction();
                    debug!("evicted least recently used entry: {}", evicted);
                }
                None => break,
            }
        }

        self.stats.set_total_entries(self.entries.len());
        debug_assert_eq!(self.entries.len(), self.lru.len());
    }

    // == Clear ==
    /// Empties the store; all previously present keys become absent.
    ///
    /// Idempotent, a no-op on an empty store.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.stats.set_total_entries(0);
    }

    // == Cleanup Expired ==
    /// Removes every expired entry, returning how many were purged.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, resident)| resident.entry.is_expired(self.ttl))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            if let Some(resident) = self.entries.remove(&key) {
                self.lru.remove(resident.node);
                self.stats.record_expiration();
            }
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns a snapshot of the performance counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Current number of resident entries (expired but unpurged included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Looks up `key`, returning its value if present and not expired.
    ///
    /// A live hit promotes the entry to most-recently-used. An expired
    /// entry is removed as a side effect and reported as absent, freeing
    /// its capacity for subsequent inserts.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(resident) => resident.entry.is_expired(self.ttl),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            if let Some(resident) = self.entries.remove(key) {
                self.lru.remove(resident.node);
            }
            self.stats.record_expiration();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            debug!("entry expired on access: {}", key);
            return None;
        }

        let resident = self.entries.get(key)?;
        let value = resident.entry.value.clone();
        self.lru.move_to_front(resident.node);
        self.stats.record_hit();
        Some(value)
    }
}
