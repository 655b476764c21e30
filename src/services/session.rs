//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses opaque random tokens carried in an HttpOnly cookie. The
//! store maps token -> (user, expiry) in memory; a restart signs everyone out.
//!
//! TRADE-OFFS
//! ==========
//! Expired sessions are rejected on lookup immediately but only reclaimed by
//! the periodic sweeper, so memory lags expiry by up to one sweep interval.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Identity attached to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Normalized email address.
    pub email: String,
}

struct SessionEntry {
    user: SessionUser,
    expires_at: Instant,
}

/// In-memory token -> session map with a fixed time-to-live.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    /// Create a session for `user`, returning the token.
    pub async fn create(&self, user: SessionUser) -> String {
        let token = generate_token();
        let entry = SessionEntry { user, expires_at: Instant::now() + self.ttl };
        self.inner.write().await.insert(token.clone(), entry);
        token
    }

    /// Validate a token and return the associated user.
    pub async fn validate(&self, token: &str) -> Option<SessionUser> {
        self.validate_at(token, Instant::now()).await
    }

    pub(crate) async fn validate_at(&self, token: &str, now: Instant) -> Option<SessionUser> {
        {
            let sessions = self.inner.read().await;
            match sessions.get(token) {
                None => return None,
                Some(entry) if entry.expires_at > now => return Some(entry.user.clone()),
                Some(_) => {}
            }
        }
        self.inner.write().await.remove(token);
        None
    }

    /// Delete a session by token. Unknown tokens are ignored.
    pub async fn delete(&self, token: &str) {
        self.inner.write().await.remove(token);
    }

    /// Drop every session that has expired by `now`, returning how many went.
    pub async fn purge_expired(&self, now: Instant) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.expires_at > now);
        before - sessions.len()
    }

    #[cfg(test)]
    pub async fn session_count(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Spawn a background task that purges expired sessions every `interval`.
pub fn spawn_session_sweeper(store: SessionStore, interval: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let purged = store.purge_expired(Instant::now()).await;
            if purged > 0 {
                tracing::debug!(purged, "expired sessions purged");
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
