//! Sign-in page using email + access-code auth.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lives inside `AuthLayout`, so it only renders for signed-out visitors. A
//! successful verification writes an authenticated session into the shared
//! signal; the surrounding gate then performs the redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::auth_layout::AuthLayout;
use crate::state::session::use_session;

const CODE_LEN: usize = 6;
const MISSING_EMAIL: &str = "Enter an email first.";
const MISSING_FIELDS: &str = "Enter both email and 6-char code.";

/// Access codes are case-insensitive; the server expects uppercase.
pub(crate) fn normalize_code_input(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

pub(crate) fn validate_request_code_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(MISSING_EMAIL);
    }
    Ok(email.to_owned())
}

pub(crate) fn validate_verify_code_input(email: &str, code: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let code = code.trim();
    if email.is_empty() || code.chars().count() != CODE_LEN {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), code.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AuthLayout>
            <LoginForm/>
        </AuthLayout>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let session = use_session();
    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_request_code_input(&email.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Requesting code...".to_owned());
        echoed_code.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_access_code(&email_value).await {
                Ok(code_opt) => {
                    echoed_code.set(code_opt);
                    info.set("Code sent. Check your email.".to_owned());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email_value;
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, code_value) = match validate_verify_code_input(&email.get(), &code.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_access_code(&email_value, &code_value).await {
                Ok(user) => {
                    log::info!("signed in as {}", user.email);
                    session.set(crate::state::session::SessionState::authenticated(user));
                }
                Err(e) => {
                    info.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, code_value, session);
    };

    view! {
        <div class="login-card">
            <h1>"Sign in to Beacon"</h1>
            <p class="login-card__subtitle">"We'll email you a 6-character access code."</p>
            <form class="login-form" on:submit=on_request_code>
                <input
                    class="login-input"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    "Send code"
                </button>
            </form>
            <form class="login-form" on:submit=on_verify_code>
                <input
                    class="login-input login-input--code"
                    type="text"
                    maxlength="6"
                    placeholder="ABC234"
                    autocomplete="one-time-code"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
                />
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    "Sign in with code"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
            <Show when=move || echoed_code.get().is_some()>
                <p class="login-message login-message--code">
                    "Code: "
                    <span>{move || echoed_code.get().unwrap_or_default()}</span>
                </p>
            </Show>
        </div>
    }
}
