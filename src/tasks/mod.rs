//! Background Tasks Module
//!
//! Long-running maintenance tasks for the cache.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
