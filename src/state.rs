//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Every store is internally `Arc`-wrapped, so cloning the state is cheap and
//! all clones observe the same sessions and codes.

use std::sync::Arc;

use crate::config::Config;
use crate::rate_limit::{RateLimitConfig, RateLimiter};
use crate::services::email_auth::AccessCodeStore;
use crate::services::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
    pub access_codes: AccessCodeStore,
    /// Limiter for access-code requests, keyed by normalized email.
    pub code_rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, rate_limits: RateLimitConfig) -> Self {
        Self {
            sessions: SessionStore::new(config.session_ttl),
            access_codes: AccessCodeStore::new(config.access_code_ttl),
            code_rate_limiter: RateLimiter::new(rate_limits),
            config: Arc::new(config),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
