//! Configuration Module
//!
//! Constructor-time configuration for the cache and rate limiter.

use std::time::Duration;

/// Configuration parameters for the caching and rate-limiting core.
///
/// All values are supplied at construction time by the host application;
/// this core reads no environment variables and no files.
///
/// Invalid values are unrepresentable by type: capacities and budgets are
/// unsigned, durations are non-negative. The zero values have defined
/// behavior instead of being clamped:
/// - `max_capacity == 0`: every insert is immediately evicted again.
/// - `ttl == 0`: entries expire as soon as the clock advances past the write.
/// - `max_requests == 0`: the limiter denies everything.
/// - `window == 0`: the limiter admits everything.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of resident cache entries
    pub max_capacity: usize,
    /// Validity window of an entry, measured from its last write
    pub ttl: Duration,
    /// Admitted operations per rate window
    pub max_requests: usize,
    /// Rolling rate-limit window length
    pub window: Duration,
    /// Interval between background expiry sweeps
    pub cleanup_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_capacity: 100,
            ttl: Duration::from_secs(3600),
            max_requests: 10,
            window: Duration::from_secs(60),
            cleanup_interval: Duration::from_secs(60),
        }
    }
}
