//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's auth JSON payloads so serde round-trips
//! stay lossless. Field names are the wire names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name, derived from the email local part on first sign-in.
    pub name: String,
    /// Normalized (lowercase) email address.
    pub email: String,
}

/// Session status as reported by `GET /api/auth/session`.
///
/// The server never reports `loading`; that value only exists client-side
/// before the first response arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireSessionStatus {
    Authenticated,
    Unauthenticated,
}

/// Body of `GET /api/auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub status: WireSessionStatus,
    #[serde(default)]
    pub user: Option<User>,
}

/// Body of `POST /api/auth/email/request-code`.
///
/// `code` is only present when the server echoes codes for development.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestCodeResponse {
    #[serde(default)]
    pub code: Option<String>,
}

/// Body of `POST /api/auth/email/verify-code` on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub user: User,
}
