//! Layout for the sign-in flow: logo above a centered card, behind the
//! auth gate.

use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::logo::Logo;

#[component]
pub fn AuthLayout(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="auth-layout">
            <a class="auth-layout__brand" href="/">
                <Logo size=40 wordmark=true/>
            </a>
            <div class="auth-layout__card">
                <AuthGate>{children()}</AuthGate>
            </div>
        </div>
    }
}
