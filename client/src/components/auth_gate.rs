//! Gate for signed-out-only routes such as sign in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Observes the session signal pushed by the session source. Children are
//! rendered only once the visitor is known to be signed out. An
//! authenticated session triggers a single redirect to the signed-in
//! destination and keeps the loading indicator up until the route changes,
//! so gated content never flashes.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading_indicator::LoadingIndicator;
use crate::state::session::{SessionState, use_session};
use crate::util::auth::{GateView, gate_view, install_signed_in_redirect};

#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    install_signed_in_redirect(session, use_navigate());

    view! { <GatedContent session=session>{children()}</GatedContent> }
}

/// Loading indicator or `children`, following `gate_view` for the current
/// session status. Holds no navigation of its own.
#[component]
pub fn GatedContent(session: RwSignal<SessionState>, children: ChildrenFn) -> impl IntoView {
    let gate = Memo::new(move |_| session.with(|s| gate_view(s.status)));

    move || match gate.get() {
        GateView::Loading => view! { <LoadingIndicator/> }.into_any(),
        GateView::Children => children().into_any(),
    }
}
