//! Marketing layout: navigation bar, content slot, footer.
//!
//! Stateless. Pages that need a public frame wrap their body in
//! `PublicShell`; nothing here reads the session.

use leptos::prelude::*;

use crate::components::site_footer::SiteFooter;
use crate::components::site_nav::SiteNav;

#[component]
pub fn PublicShell(children: Children) -> impl IntoView {
    view! {
        <div class="public-shell">
            <SiteNav/>
            <main class="public-shell__content">{children()}</main>
            <SiteFooter/>
        </div>
    }
}
