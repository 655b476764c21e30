//! Public site navigation bar: logo home link and the sign-in call to action.

use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::util::auth::SIGN_IN_PATH;

pub const SIGN_IN_LABEL: &str = "Sign in";

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav" aria-label="Main">
            <a class="site-nav__brand" href="/" aria-label="Beacon home">
                <Logo size=28 wordmark=true/>
            </a>
            <a class="site-nav__cta button button--primary" href=SIGN_IN_PATH>
                {SIGN_IN_LABEL}
            </a>
        </nav>
    }
}
