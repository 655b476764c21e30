use super::*;

#[test]
fn heading_id_lowercases_and_dashes_words() {
    assert_eq!(heading_id("Welcome Back"), "page-header-welcome-back");
}

#[test]
fn heading_id_collapses_punctuation_runs() {
    assert_eq!(heading_id("Hello,   world!!"), "page-header-hello-world");
}

#[test]
fn heading_id_skips_leading_separators() {
    assert_eq!(heading_id("  -- Pricing"), "page-header-pricing");
}

#[test]
fn heading_id_keeps_digits() {
    assert_eq!(heading_id("Plan 2"), "page-header-plan-2");
}

#[test]
fn heading_id_falls_back_for_empty_titles() {
    assert_eq!(heading_id(""), "page-header-untitled");
    assert_eq!(heading_id("!!!"), "page-header-untitled");
}

#[test]
fn header_is_labelled_by_its_heading() {
    let html = view! { <PageHeader title="Welcome Back" description="Signed in"/> }.to_html();
    assert!(html.contains(r#"aria-labelledby="page-header-welcome-back""#), "{html}");
    assert!(html.contains(r#"id="page-header-welcome-back""#), "{html}");
    assert!(html.contains("Signed in"), "{html}");
}
