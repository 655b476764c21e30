//! Public marketing page.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::components::public_shell::PublicShell;
use crate::util::auth::SIGN_IN_PATH;

/// `(title, body)` pairs for the feature list.
const FEATURES: &[(&str, &str)] = &[
    ("Passwordless", "Sign in with a short-lived code sent to your inbox."),
    ("Private by default", "Sessions live in an HttpOnly cookie and expire on their own."),
    ("Fast everywhere", "Pages render on the server and hydrate in the browser."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <PublicShell>
            <PageHeader
                title="Light the way to your workspace"
                description="Beacon keeps your team's home base one sign-in away."
            >
                <a class="button button--primary" href=SIGN_IN_PATH>"Get started"</a>
            </PageHeader>
            <ul class="feature-list">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <li class="feature-list__item">
                                <h2>{*title}</h2>
                                <p>{*body}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </PublicShell>
    }
}
