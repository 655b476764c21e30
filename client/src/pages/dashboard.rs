//! Signed-in landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is where the auth gate sends visitors who are already signed in. It
//! applies the mirror rule: once the session resolves as signed out (or the
//! user signs out here) the visitor is sent back to sign in.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading_indicator::LoadingIndicator;
use crate::components::logo::Logo;
use crate::components::page_header::PageHeader;
use crate::state::session::{SessionState, use_session};
use crate::util::auth::install_unauth_redirect;

/// Greeting title for the signed-in header.
pub(crate) fn welcome_title(state: &SessionState) -> String {
    match state.display_name() {
        "" => "Welcome back".to_owned(),
        name => format!("Welcome back, {name}"),
    }
}

pub(crate) fn account_email(state: &SessionState) -> String {
    state.user.as_ref().map(|u| u.email.clone()).unwrap_or_default()
}

/// Session to publish after a sign-out attempt. A failed logout keeps the
/// current session and yields the message to show instead.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn after_sign_out(result: Result<(), String>) -> Result<SessionState, String> {
    result
        .map(|()| SessionState::unauthenticated())
        .map_err(|detail| format!("Couldn't sign out ({detail}). Try again."))
}

pub(crate) fn fallback_label(state: &SessionState) -> &'static str {
    if state.is_loading() { "Loading..." } else { "Redirecting to sign in..." }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    let signing_out = RwSignal::new(false);
    let sign_out_error = RwSignal::new(None::<String>);
    let on_sign_out = move |_| {
        if signing_out.get() {
            return;
        }
        signing_out.set(true);
        sign_out_error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match after_sign_out(crate::net::api::logout().await) {
                Ok(next) => session.set(next),
                Err(msg) => {
                    log::warn!("{msg}");
                    sign_out_error.set(Some(msg));
                    signing_out.set(false);
                }
            }
        });
    };

    view! {
        <Show
            when=move || session.with(SessionState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        {move || view! { <LoadingIndicator label=fallback_label(&session.get())/> }}
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <div class="dashboard-page__bar">
                    <a href="/" aria-label="Beacon home">
                        <Logo size=28/>
                    </a>
                </div>
                <PageHeader
                    title=session.with(welcome_title)
                    description=session.with(account_email)
                >
                    <button
                        class="button button--secondary"
                        type="button"
                        disabled=move || signing_out.get()
                        on:click=on_sign_out
                    >
                        "Sign out"
                    </button>
                </PageHeader>
                <Show when=move || sign_out_error.with(Option::is_some)>
                    <p class="dashboard-page__error" role="alert">
                        {move || sign_out_error.get().unwrap_or_default()}
                    </p>
                </Show>
                <section class="dashboard-page__body">
                    <p>"You're signed in. Nothing else lives here yet."</p>
                </section>
            </div>
        </Show>
    }
}
