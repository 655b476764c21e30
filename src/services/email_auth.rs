//! Email access-code auth service.
//!
//! Creates and verifies short-lived six-character codes linked to an email.
//! Only SHA-256 hashes of codes are kept. Users are registered on their first
//! successful verification and keyed by normalized email.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;
use tokio::time::Instant;
use uuid::Uuid;

use super::session::{SessionUser, bytes_to_hex};

pub const CODE_LEN: usize = 6;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const MAX_FAILED_ATTEMPTS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmailAuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid code")]
    InvalidCode,
    #[error("expired or incorrect code")]
    VerificationFailed,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    let normalized = code.trim().to_ascii_uppercase();
    if normalized.len() != CODE_LEN || !normalized.bytes().all(|c| CODE_ALPHABET.contains(&c)) {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn generate_access_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

#[must_use]
pub fn hash_access_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

fn name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("user")
        .to_owned()
}

struct PendingCode {
    code_hash: String,
    expires_at: Instant,
    attempts: u32,
}

#[derive(Default)]
struct Inner {
    /// Outstanding code per normalized email. At most one per email.
    pending: HashMap<String, PendingCode>,
    /// Registered users per normalized email.
    users: HashMap<String, SessionUser>,
}

/// In-memory access-code issuer and user registry.
#[derive(Clone)]
pub struct AccessCodeStore {
    inner: Arc<Mutex<Inner>>,
    ttl: Duration,
}

impl AccessCodeStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(Inner::default())), ttl }
    }

    /// Issue a fresh code for `email`, replacing any outstanding one.
    /// Expired codes for other addresses are dropped on the way.
    ///
    /// # Errors
    ///
    /// `InvalidEmail` when the address does not normalize.
    pub async fn request(&self, email: &str) -> Result<String, EmailAuthError> {
        let normalized = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
        let code = generate_access_code();
        let now = Instant::now();
        let pending = PendingCode {
            code_hash: hash_access_code(&code),
            expires_at: now + self.ttl,
            attempts: 0,
        };
        let mut inner = self.inner.lock().await;
        inner.pending.retain(|_, entry| entry.expires_at > now);
        inner.pending.insert(normalized, pending);
        Ok(code)
    }

    /// Drop codes that expired before `now`. Returns how many were removed.
    pub async fn purge_expired(&self, now: Instant) -> usize {
        let mut inner = self.inner.lock().await;
        let before = inner.pending.len();
        inner.pending.retain(|_, entry| entry.expires_at > now);
        before - inner.pending.len()
    }

    #[cfg(test)]
    pub async fn pending_count(&self) -> usize {
        self.inner.lock().await.pending.len()
    }

    /// Consume a matching, unexpired code and return the (possibly new) user.
    ///
    /// A wrong code counts as a failed attempt; the code is burned after
    /// `MAX_FAILED_ATTEMPTS` failures.
    ///
    /// # Errors
    ///
    /// `InvalidEmail`/`InvalidCode` for malformed input, `VerificationFailed`
    /// for missing, expired, burned or mismatched codes.
    pub async fn verify(&self, email: &str, code: &str) -> Result<SessionUser, EmailAuthError> {
        let normalized_email = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
        let normalized_code = normalize_code(code).ok_or(EmailAuthError::InvalidCode)?;
        let code_hash = hash_access_code(&normalized_code);

        let mut inner = self.inner.lock().await;
        let Some(pending) = inner.pending.get_mut(&normalized_email) else {
            return Err(EmailAuthError::VerificationFailed);
        };

        if pending.expires_at <= Instant::now() {
            inner.pending.remove(&normalized_email);
            return Err(EmailAuthError::VerificationFailed);
        }

        if pending.code_hash != code_hash {
            pending.attempts += 1;
            if pending.attempts >= MAX_FAILED_ATTEMPTS {
                inner.pending.remove(&normalized_email);
            }
            return Err(EmailAuthError::VerificationFailed);
        }

        inner.pending.remove(&normalized_email);
        let user = inner
            .users
            .entry(normalized_email.clone())
            .or_insert_with(|| SessionUser {
                id: Uuid::new_v4(),
                name: name_from_email(&normalized_email),
                email: normalized_email,
            })
            .clone();
        Ok(user)
    }
}

/// Spawn a background task that drops expired access codes every `interval`.
pub fn spawn_access_code_sweeper(store: AccessCodeStore, interval: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let purged = store.purge_expired(Instant::now()).await;
            if purged > 0 {
                tracing::debug!(purged, "expired access codes purged");
            }
        }
    })
}

#[cfg(test)]
#[path = "email_auth_test.rs"]
mod tests;
