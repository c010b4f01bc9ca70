//! Sliding-Window Rate Limiter Module
//!
//! Admits at most `max_requests` operations within any trailing `window`,
//! counted over the actual admission instants rather than fixed-aligned
//! buckets.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::Config;

// == Rate Limiter ==
/// Non-blocking sliding-window rate limiter.
///
/// Admission timestamps are kept oldest-first; before every decision the
/// expired prefix is trimmed, so the recorded count is exactly the number
/// of admissions inside the current window. The limiter never sleeps;
/// callers that want to wait out a denial must schedule their own retry.
#[derive(Debug)]
pub struct RateLimiter {
    /// Admitted operations per window
    max_requests: usize,
    /// Rolling window length
    window: Duration,
    /// Admission instants within the current window, oldest first
    timestamps: VecDeque<Instant>,
}

impl RateLimiter {
    // == Constructor ==
    /// Creates a limiter admitting `max_requests` per `window`.
    ///
    /// `max_requests == 0` denies every attempt; a zero `window` admits
    /// every attempt, since each recorded instant immediately falls out of
    /// the trailing window.
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            timestamps: VecDeque::new(),
        }
    }

    // == Try Acquire ==
    /// Attempts to admit one operation.
    ///
    /// Returns `true` and records the admission instant when budget
    /// remains, `false` with no state change otherwise.
    pub fn try_acquire(&mut self) -> bool {
        let now = Instant::now();
        self.prune(now);

        if self.timestamps.len() < self.max_requests {
            self.timestamps.push_back(now);
            true
        } else {
            debug!(
                "rate limit reached: {} requests within {:?}",
                self.max_requests, self.window
            );
            false
        }
    }

    // == Reconfigure ==
    /// Replaces both limits and starts a fresh window.
    ///
    /// Historical admissions are discarded rather than reinterpreted under
    /// the new parameters.
    pub fn reconfigure(&mut self, max_requests: usize, window: Duration) {
        self.max_requests = max_requests;
        self.window = window;
        self.timestamps.clear();
        info!(
            "rate limiter reconfigured: {} requests per {:?}",
            max_requests, window
        );
    }

    // == Internal: prune ==
    /// Trims the prefix of instants that have slid out of the window.
    fn prune(&mut self, now: Instant) {
        while let Some(&oldest) = self.timestamps.front() {
            if now.duration_since(oldest) >= self.window {
                self.timestamps.pop_front();
            } else {
                break;
            }
        }
    }
}

// == Shared Limiter ==
/// Cloneable, thread-safe handle to a [`RateLimiter`].
#[derive(Debug, Clone)]
pub struct SharedLimiter {
    inner: Arc<Mutex<RateLimiter>>,
}

impl SharedLimiter {
    // == Constructors ==
    pub fn new(limiter: RateLimiter) -> Self {
        Self {
            inner: Arc::new(Mutex::new(limiter)),
        }
    }

    /// Builds a limiter sized per the given configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(RateLimiter::new(config.max_requests, config.window))
    }

    // == Try Acquire ==
    pub async fn try_acquire(&self) -> bool {
        let mut limiter = self.inner.lock().await;
        limiter.try_acquire()
    }

    // == Reconfigure ==
    pub async fn reconfigure(&self, max_requests: usize, window: Duration) {
        let mut limiter = self.inner.lock().await;
        limiter.reconfigure(max_requests, window);
    }
}
