//! Fetch Orchestration Module
//!
//! The request flow a chat session runs for every prompt: derive the cache
//! key, serve from cache on a hit, otherwise pass the rate-limit gate and
//! invoke the injected remote fetch, storing the result on success.

use std::future::Future;

use tracing::{debug, warn};

use crate::cache::SharedCache;
use crate::error::FetchError;
use crate::key::{derive_key, ChatTurn};
use crate::limiter::SharedLimiter;

// == Fetch Response ==
/// Resolves a chat request through the cache and rate limiter.
///
/// `fetch` is only invoked on a cache miss that the limiter admits, so a
/// cached response consumes no rate budget. A failed fetch caches nothing
/// and leaves the admission spent; retry policy belongs to the caller.
pub async fn fetch_response<V, F, Fut, E>(
    cache: &SharedCache<V>,
    limiter: &SharedLimiter,
    prompt: &str,
    history: &[ChatTurn],
    fetch: F,
) -> Result<V, FetchError<E>>
where
    V: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>>,
    E: std::error::Error,
{
    let key = derive_key(prompt, history);

    if let Some(value) = cache.get(&key).await {
        debug!("serving cached response");
        return Ok(value);
    }

    if !limiter.try_acquire().await {
        warn!("outbound request denied by rate limiter");
        return Err(FetchError::RateLimited);
    }

    let value = fetch().await.map_err(FetchError::Upstream)?;
    cache.put(key, value.clone()).await;
    Ok(value)
}
