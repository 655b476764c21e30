//! Shared auth routing rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signed-out-only routes (sign in) and signed-in-only routes (dashboard)
//! apply mirror-image redirect rules against the same session signal. Both
//! rules are split into a pure decision (`gate_view`, `RedirectOnce`) and a
//! thin reactive installer so the decisions can be tested without a router.
//!
//! DESIGN
//! ======
//! Navigation is not assumed idempotent: each installer owns a
//! `RedirectOnce` guard so a redirect fires once per entry into the
//! triggering status, no matter how often the effect re-runs.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, SessionStatus};

/// Where a visitor who is already signed in gets sent from gated routes.
pub const SIGNED_IN_DESTINATION: &str = "/dashboard";

/// Sign-in route, also the target for signed-out visitors of private pages.
pub const SIGN_IN_PATH: &str = "/login";

/// What a signed-out-only route may show for a given status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    Loading,
    Children,
}

/// Children are revealed only once the visitor is known to be signed out.
/// `Authenticated` keeps the loading indicator up while the redirect lands.
#[must_use]
pub fn gate_view(status: SessionStatus) -> GateView {
    match status {
        SessionStatus::Unauthenticated => GateView::Children,
        SessionStatus::Loading | SessionStatus::Authenticated => GateView::Loading,
    }
}

/// Guarded transition flag: reports `true` once per entry into `trigger`.
///
/// Observing any other status re-arms the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedirectOnce {
    trigger: SessionStatus,
    fired: bool,
}

impl RedirectOnce {
    #[must_use]
    pub fn new(trigger: SessionStatus) -> Self {
        Self { trigger, fired: false }
    }

    /// Record an observation, returning whether navigation should fire now.
    pub fn observe(&mut self, status: SessionStatus) -> bool {
        if status != self.trigger {
            self.fired = false;
            return false;
        }
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

fn install_redirect<F>(session: RwSignal<SessionState>, trigger: SessionStatus, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut guard = RedirectOnce::new(trigger);
    Effect::new(move || {
        let status = session.with(|s| s.status);
        if guard.observe(status) {
            navigate(path, replace_history());
        }
    });
}

/// Redirect to `SIGNED_IN_DESTINATION` whenever the session becomes
/// authenticated.
pub fn install_signed_in_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(session, SessionStatus::Authenticated, SIGNED_IN_DESTINATION, navigate);
}

/// Redirect to `SIGN_IN_PATH` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(session, SessionStatus::Unauthenticated, SIGN_IN_PATH, navigate);
}
