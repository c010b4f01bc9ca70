//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value plus the instant of its last write.
///
/// Timestamps use the monotonic clock, so TTL checks are immune to wall
/// clock adjustments. The write instant is refreshed on every overwrite but
/// never on read.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Instant of the last write
    inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry expires strictly after `ttl` has elapsed
    /// since its last write. With `ttl == 0` an entry is still returned at
    /// the exact write instant and expires on the next clock tick.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() > ttl
    }

    // == Age ==
    /// Time elapsed since the last write.
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }
}
