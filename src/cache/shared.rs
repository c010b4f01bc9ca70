//! Shared Cache Handle
//!
//! Thread-safe wrapper around [`CacheStore`] for use from concurrent chat
//! sessions. Cloning the handle shares the same underlying store; all
//! operations serialize through one lock, so each instance observes a
//! total order over its operations.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::config::Config;

// == Shared Cache ==
/// Cloneable, thread-safe handle to a [`CacheStore`].
///
/// `get` takes the write lock because a hit promotes the entry and a miss
/// may purge an expired one. No lock is held across any await point other
/// than the lock acquisition itself, and no I/O happens under the lock.
#[derive(Debug)]
pub struct SharedCache<V> {
    inner: Arc<RwLock<CacheStore<V>>>,
}

impl<V> SharedCache<V> {
    // == Constructors ==
    pub fn new(store: CacheStore<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Builds a cache sized per the given configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheStore::new(config.max_capacity, config.ttl))
    }

    // == Put ==
    pub async fn put(&self, key: String, value: V) {
        let mut store = self.inner.write().await;
        store.put(key, value);
    }

    // == Clear ==
    pub async fn clear(&self) {
        let mut store = self.inner.write().await;
        store.clear();
    }

    // == Cleanup Expired ==
    /// Purges expired entries, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut store = self.inner.write().await;
        store.cleanup_expired()
    }

    // == Stats ==
    pub async fn stats(&self) -> CacheStats {
        let store = self.inner.read().await;
        store.stats()
    }

    // == Length ==
    pub async fn len(&self) -> usize {
        let store = self.inner.read().await;
        store.len()
    }

    pub async fn is_empty(&self) -> bool {
        let store = self.inner.read().await;
        store.is_empty()
    }
}

impl<V: Clone> SharedCache<V> {
    // == Get ==
    /// Looks up `key`, promoting the entry on a hit.
    pub async fn get(&self, key: &str) -> Option<V> {
        let mut store = self.inner.write().await;
        store.get(key)
    }
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
