//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.
//! The cache stays correct without it (expired entries are purged lazily on
//! access); the sweep bounds the memory held by entries nothing reads again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically purges expired entries.
///
/// The task sleeps for `interval` between sweeps and runs until aborted;
/// abort the returned handle during shutdown.
pub fn spawn_cleanup_task<V>(cache: SharedCache<V>, interval: Duration) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("starting TTL cleanup task, sweep interval {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;
            if removed > 0 {
                info!("TTL sweep removed {} expired entries", removed);
            } else {
                debug!("TTL sweep found no expired entries");
            }
        }
    })
}
