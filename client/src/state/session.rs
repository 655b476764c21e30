//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session signal is the single source the auth gate and the
//! signed-in pages observe. It is provided once in `App` and written only by
//! the session source and by explicit sign-in/sign-out actions.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{SessionResponse, User, WireSessionStatus};

/// Tri-valued session status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No answer from the identity provider yet.
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Observed session: status plus the identity when one is established.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<User>,
}

impl SessionState {
    #[must_use]
    pub fn loading() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { status: SessionStatus::Authenticated, user: Some(user) }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { status: SessionStatus::Unauthenticated, user: None }
    }

    /// Map the server's session payload. An authenticated answer without a
    /// user is not trusted.
    #[must_use]
    pub fn from_response(resp: SessionResponse) -> Self {
        match (resp.status, resp.user) {
            (WireSessionStatus::Authenticated, Some(user)) => Self::authenticated(user),
            _ => Self::unauthenticated(),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Name shown in signed-in chrome, empty when no identity is known.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.name.as_str())
    }
}

/// Read the session signal provided by `App`.
///
/// Panics when no provider is mounted: that is a wiring mistake, not a
/// runtime condition.
pub fn use_session() -> RwSignal<SessionState> {
    expect_context::<RwSignal<SessionState>>()
}

/// Resolve the session once from the server and push it into `session`.
///
/// A failed fetch resolves to `Unauthenticated` so gated views never stay on
/// the loading indicator. On the server this is a no-op and the signal stays
/// `Loading` for the SSR pass.
pub fn install_session_source(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let next = match crate::net::api::fetch_session().await {
            Some(resp) => SessionState::from_response(resp),
            None => {
                log::warn!("session fetch failed; treating as signed out");
                SessionState::unauthenticated()
            }
        };
        log::debug!("session resolved: {:?}", next.status);
        session.set(next);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
