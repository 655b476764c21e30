//! Beacon logo rendered as inline SVG.
//!
//! The mark is a lighthouse lamp: a rounded tower with a beam wedge. With
//! the wordmark enabled the view box widens to fit the product name to the
//! right of the mark; height stays fixed so `size` always means "mark height".

#[cfg(test)]
#[path = "logo_test.rs"]
mod logo_test;

use leptos::prelude::*;

/// Mark is drawn on a square grid of this many units.
const MARK_UNITS: u32 = 32;
/// Extra horizontal units reserved for the wordmark.
const WORDMARK_UNITS: u32 = 88;

pub const PRODUCT_NAME: &str = "Beacon";

/// SVG `viewBox` for the mark alone or mark + wordmark.
pub fn logo_view_box(wordmark: bool) -> String {
    let width = if wordmark { MARK_UNITS + WORDMARK_UNITS } else { MARK_UNITS };
    format!("0 0 {width} {MARK_UNITS}")
}

/// Rendered pixel `(width, height)` for a mark `size` pixels tall.
///
/// Width saturates at `u32::MAX` for absurdly large sizes.
pub fn logo_dimensions(size: u32, wordmark: bool) -> (u32, u32) {
    if !wordmark {
        return (size, size);
    }
    let width = (u64::from(size) * u64::from(MARK_UNITS + WORDMARK_UNITS)).div_ceil(u64::from(MARK_UNITS));
    (u32::try_from(width).unwrap_or(u32::MAX), size)
}

/// Product logo.
#[component]
pub fn Logo(
    /// Height of the mark in pixels.
    #[prop(default = 32)]
    size: u32,
    /// Render the product name next to the mark.
    #[prop(default = false)]
    wordmark: bool,
) -> impl IntoView {
    let (width, height) = logo_dimensions(size, wordmark);

    view! {
        <svg
            class="logo"
            xmlns="http://www.w3.org/2000/svg"
            viewBox=logo_view_box(wordmark)
            width=width.to_string()
            height=height.to_string()
            role="img"
            aria-label=PRODUCT_NAME
        >
            <path class="logo__beam" d="M16 9 L31 3 L31 15 Z" fill="currentColor" opacity="0.35"/>
            <rect class="logo__lamp" x="12" y="5" width="8" height="8" rx="2" fill="currentColor"/>
            <path class="logo__tower" d="M11 15 H21 L23 29 H9 Z" fill="currentColor"/>
            <rect x="8" y="29" width="16" height="2" rx="1" fill="currentColor"/>
            {wordmark.then(|| view! {
                <text
                    class="logo__wordmark"
                    x="40"
                    y="23"
                    font-size="18"
                    font-weight="700"
                    fill="currentColor"
                >
                    {PRODUCT_NAME}
                </text>
            })}
        </svg>
    }
}
