use super::*;

#[test]
fn endpoints_live_under_api_auth() {
    for endpoint in [SESSION_ENDPOINT, REQUEST_CODE_ENDPOINT, VERIFY_CODE_ENDPOINT, LOGOUT_ENDPOINT] {
        assert!(endpoint.starts_with("/api/auth/"), "{endpoint}");
    }
}

#[test]
fn request_code_failed_message_maps_known_statuses() {
    assert_eq!(request_code_failed_message(400), "Enter a valid email address.");
    assert!(request_code_failed_message(429).starts_with("Too many code requests"));
}

#[test]
fn request_code_failed_message_falls_back_to_status() {
    assert_eq!(request_code_failed_message(503), "request code failed: 503");
}

#[test]
fn verify_code_failed_message_maps_known_statuses() {
    assert_eq!(verify_code_failed_message(400), "Enter both email and 6-char code.");
    assert_eq!(verify_code_failed_message(401), "That code is expired or incorrect.");
    assert_eq!(verify_code_failed_message(500), "verify code failed: 500");
}

#[test]
fn request_bodies_serialize_with_wire_names() {
    let body = serde_json::to_value(RequestCodeBody { email: "a@b.com" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com" }));

    let body = serde_json::to_value(VerifyCodeBody { email: "a@b.com", code: "ABC234" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "code": "ABC234" }));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_session_is_none_off_browser() {
    let fut = fetch_session();
    assert!(block_on_ready(fut).is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_reports_failure_off_browser() {
    assert!(block_on_ready(logout()).is_err());
}

// Minimal executor for the non-hydrate stubs, which complete on first poll.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should resolve immediately"),
    }
}
