//! In-memory rate limiting for access-code requests.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`.
//! Two limits are enforced:
//! - Per-email: 5 code requests / 10 min
//! - Global: 60 code requests / min
//!
//! Rejected requests are not recorded, so a client hammering the endpoint
//! does not extend its own lockout.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::{ConfigError, parse_or};

const DEFAULT_PER_KEY_LIMIT: usize = 5;
const DEFAULT_PER_KEY_WINDOW_SECS: u64 = 600;

const DEFAULT_GLOBAL_LIMIT: usize = 60;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_key_limit: usize,
    pub per_key_window: Duration,
    pub global_limit: usize,
    pub global_window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_key_limit: DEFAULT_PER_KEY_LIMIT,
            per_key_window: Duration::from_secs(DEFAULT_PER_KEY_WINDOW_SECS),
            global_limit: DEFAULT_GLOBAL_LIMIT,
            global_window: Duration::from_secs(DEFAULT_GLOBAL_WINDOW_SECS),
        }
    }
}

impl RateLimitConfig {
    /// Defaults overridden by `RATE_LIMIT_PER_EMAIL`,
    /// `RATE_LIMIT_PER_EMAIL_WINDOW_SECS`, `RATE_LIMIT_GLOBAL` and
    /// `RATE_LIMIT_GLOBAL_WINDOW_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for any key that is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for any key that is set but unparseable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let per_key_window_secs = parse_or(
            "RATE_LIMIT_PER_EMAIL_WINDOW_SECS",
            lookup("RATE_LIMIT_PER_EMAIL_WINDOW_SECS"),
            DEFAULT_PER_KEY_WINDOW_SECS,
        )?;
        let global_window_secs = parse_or(
            "RATE_LIMIT_GLOBAL_WINDOW_SECS",
            lookup("RATE_LIMIT_GLOBAL_WINDOW_SECS"),
            DEFAULT_GLOBAL_WINDOW_SECS,
        )?;

        Ok(Self {
            per_key_limit: parse_or("RATE_LIMIT_PER_EMAIL", lookup("RATE_LIMIT_PER_EMAIL"), DEFAULT_PER_KEY_LIMIT)?,
            per_key_window: Duration::from_secs(per_key_window_secs),
            global_limit: parse_or("RATE_LIMIT_GLOBAL", lookup("RATE_LIMIT_GLOBAL"), DEFAULT_GLOBAL_LIMIT)?,
            global_window: Duration::from_secs(global_window_secs),
        })
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("per-email rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerKeyExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-key request timestamps.
    key_requests: HashMap<String, VecDeque<Instant>>,
    /// Global request timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    /// Check both per-key and global limits, then record the request.
    ///
    /// # Errors
    ///
    /// Returns which limit was hit; nothing is recorded in that case.
    pub fn check_and_record(&self, key: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(key, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, key: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let inner = &mut *guard;
        let cfg = self.config;

        // Prune and check global first (no borrow conflict).
        prune_window(&mut inner.global_requests, now, cfg.global_window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        // Keys whose window has fully drained are dropped.
        inner.key_requests.retain(|_, deque| {
            prune_window(deque, now, cfg.per_key_window);
            !deque.is_empty()
        });

        let key_deque = inner.key_requests.entry(key.to_owned()).or_default();
        if key_deque.len() >= cfg.per_key_limit {
            return Err(RateLimitError::PerKeyExceeded {
                limit: cfg.per_key_limit,
                window_secs: cfg.per_key_window.as_secs(),
            });
        }

        key_deque.push_back(now);
        inner.global_requests.push_back(now);
        Ok(())
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .key_requests
            .len()
    }
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
