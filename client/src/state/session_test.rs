use super::*;

fn ada() -> User {
    User { id: "u1".to_owned(), name: "ada".to_owned(), email: "ada@example.com".to_owned() }
}

// =============================================================
// Constructors
// =============================================================

#[test]
fn default_is_loading_without_user() {
    let state = SessionState::default();
    assert_eq!(state, SessionState::loading());
    assert!(state.is_loading());
    assert!(state.user.is_none());
}

#[test]
fn authenticated_carries_user() {
    let state = SessionState::authenticated(ada());
    assert!(state.is_authenticated());
    assert_eq!(state.display_name(), "ada");
}

#[test]
fn unauthenticated_has_empty_display_name() {
    let state = SessionState::unauthenticated();
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
    assert_eq!(state.display_name(), "");
}

// =============================================================
// from_response
// =============================================================

#[test]
fn from_response_authenticated_with_user() {
    let resp = SessionResponse { status: WireSessionStatus::Authenticated, user: Some(ada()) };
    assert_eq!(SessionState::from_response(resp), SessionState::authenticated(ada()));
}

#[test]
fn from_response_authenticated_without_user_is_signed_out() {
    let resp = SessionResponse { status: WireSessionStatus::Authenticated, user: None };
    assert_eq!(SessionState::from_response(resp), SessionState::unauthenticated());
}

#[test]
fn from_response_unauthenticated_drops_stray_user() {
    let resp = SessionResponse { status: WireSessionStatus::Unauthenticated, user: Some(ada()) };
    let state = SessionState::from_response(resp);
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(state.user.is_none());
}
