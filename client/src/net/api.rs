//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SessionResponse, User};

#[cfg(any(test, feature = "hydrate"))]
const SESSION_ENDPOINT: &str = "/api/auth/session";
#[cfg(any(test, feature = "hydrate"))]
const REQUEST_CODE_ENDPOINT: &str = "/api/auth/email/request-code";
#[cfg(any(test, feature = "hydrate"))]
const VERIFY_CODE_ENDPOINT: &str = "/api/auth/email/verify-code";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
fn request_code_failed_message(status: u16) -> String {
    match status {
        400 => "Enter a valid email address.".to_owned(),
        429 => "Too many code requests. Try again in a few minutes.".to_owned(),
        _ => format!("request code failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_code_failed_message(status: u16) -> String {
    match status {
        400 => "Enter both email and 6-char code.".to_owned(),
        401 => "That code is expired or incorrect.".to_owned(),
        _ => format!("verify code failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Serialize)]
struct RequestCodeBody<'a> {
    email: &'a str,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Serialize)]
struct VerifyCodeBody<'a> {
    email: &'a str,
    code: &'a str,
}

/// Fetch the session observation from `/api/auth/session`.
/// Returns `None` on transport failure or on the server.
pub async fn fetch_session() -> Option<SessionResponse> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionResponse>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Ask the server to issue an access code for `email`.
///
/// Returns the echoed code when the server runs with code echo enabled.
///
/// # Errors
///
/// Returns a user-facing message if the request fails.
pub async fn request_access_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REQUEST_CODE_ENDPOINT)
            .json(&RequestCodeBody { email })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_code_failed_message(resp.status()));
        }
        let body: super::types::RequestCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Exchange an access code for a session. The server sets the session cookie.
///
/// # Errors
///
/// Returns a user-facing message if verification fails.
pub async fn verify_access_code(email: &str, code: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(VERIFY_CODE_ENDPOINT)
            .json(&VerifyCodeBody { email, code })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(verify_code_failed_message(resp.status()));
        }
        let body: super::types::VerifyCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns a message when the server did not confirm the logout; the session
/// cookie may still be live in that case.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("logout failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
