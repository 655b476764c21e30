//! Public site footer with the copyright line.

use leptos::prelude::*;

use crate::components::logo::PRODUCT_NAME;
use crate::util::calendar::{copyright_line, current_year};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let line = copyright_line(current_year(), PRODUCT_NAME);

    view! {
        <footer class="site-footer">
            <p class="site-footer__copyright">{line}</p>
        </footer>
    }
}
