//! Reply Cache - response caching and rate limiting for LLM chat clients
//!
//! Provides a TTL-expiring LRU cache, a sliding-window rate limiter, and
//! deterministic cache-key derivation for chat requests. The pieces compose
//! via [`fetch_response`]: derive a key from the prompt and conversation
//! history, serve from cache on a hit, otherwise consult the rate limiter
//! before invoking the injected remote fetch.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod key;
pub mod limiter;
pub mod tasks;

pub use cache::{CacheStats, CacheStore, SharedCache};
pub use config::Config;
pub use error::FetchError;
pub use fetch::fetch_response;
pub use key::{derive_key, ChatRole, ChatTurn};
pub use limiter::{RateLimiter, SharedLimiter};
pub use tasks::spawn_cleanup_task;
