//! Neutral loading indicator shown while the session is unresolved.

use leptos::prelude::*;

/// Spinner with a visually hidden, screen-reader-visible label.
#[component]
pub fn LoadingIndicator(#[prop(into, default = "Loading...".into())] label: String) -> impl IntoView {
    view! {
        <div class="loading-indicator" role="status" aria-live="polite">
            <span class="loading-indicator__spinner" aria-hidden="true"></span>
            <span class="visually-hidden">{label}</span>
        </div>
    }
}
