use super::*;
use crate::net::types::User;

fn ada() -> User {
    User { id: "u1".to_owned(), name: "Ada".to_owned(), email: "ada@example.com".to_owned() }
}

#[test]
fn welcome_title_uses_display_name() {
    assert_eq!(welcome_title(&SessionState::authenticated(ada())), "Welcome back, Ada");
}

#[test]
fn welcome_title_without_user() {
    assert_eq!(welcome_title(&SessionState::unauthenticated()), "Welcome back");
}

#[test]
fn account_email_reads_user() {
    assert_eq!(account_email(&SessionState::authenticated(ada())), "ada@example.com");
    assert_eq!(account_email(&SessionState::loading()), "");
}

#[test]
fn fallback_label_distinguishes_loading_from_redirect() {
    assert_eq!(fallback_label(&SessionState::loading()), "Loading...");
    assert_eq!(fallback_label(&SessionState::unauthenticated()), "Redirecting to sign in...");
}

#[test]
fn successful_sign_out_publishes_signed_out_session() {
    assert_eq!(after_sign_out(Ok(())), Ok(SessionState::unauthenticated()));
}

#[test]
fn failed_sign_out_keeps_session_and_explains() {
    assert_eq!(
        after_sign_out(Err("logout failed: 500".to_owned())),
        Err("Couldn't sign out (logout failed: 500). Try again.".to_owned())
    );
}
