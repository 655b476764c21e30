//! Reusable page header: title, optional description, optional actions.

#[cfg(test)]
#[path = "page_header_test.rs"]
mod page_header_test;

use leptos::prelude::*;

/// DOM id for the heading, used by `aria-labelledby` on the header landmark.
///
/// Lowercases ASCII alphanumerics and collapses every other run of characters
/// into a single `-`.
pub fn heading_id(title: &str) -> String {
    let mut slug = String::with_capacity(title.len() + 12);
    slug.push_str("page-header-");
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash {
                slug.push('-');
                pending_dash = false;
            }
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            pending_dash = true;
        }
    }
    if slug.ends_with('-') {
        slug.push_str("untitled");
    }
    slug
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    /// Action buttons rendered at the trailing edge.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let id = heading_id(&title);
    let label_id = id.clone();

    view! {
        <header class="page-header" aria-labelledby=label_id>
            <div class="page-header__text">
                <h1 class="page-header__title" id=id>{title}</h1>
                {description.map(|d| view! { <p class="page-header__description">{d}</p> })}
            </div>
            {children.map(|actions| view! { <div class="page-header__actions">{actions()}</div> })}
        </header>
    }
}
