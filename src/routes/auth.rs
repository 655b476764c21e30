//! Auth routes for session observation, email access codes, and logout.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::{RequestCodeResponse, SessionResponse, User, VerifyCodeResponse, WireSessionStatus};
use serde::Deserialize;
use time::Duration;

use crate::config::Config;
use crate::services::email_auth::{EmailAuthError, normalize_email};
use crate::services::session::SessionUser;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

impl From<&SessionUser> for User {
    fn from(user: &SessionUser) -> Self {
        Self { id: user.id.to_string(), name: user.name.clone(), email: user.email.clone() }
    }
}

fn session_cookie(token: String, config: &Config) -> Cookie<'static> {
    let max_age = i64::try_from(config.session_ttl.as_secs()).unwrap_or(i64::MAX);
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::seconds(max_age))
        .build()
}

fn cleared_session_cookie(config: &Config) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::ZERO)
        .build()
}

fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(COOKIE_NAME).map(Cookie::value).filter(|t| !t.is_empty())
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar).ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = AppState::from_ref(state);
        let user = app_state
            .sessions
            .validate(token)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/session`: observe the session without failing when
/// signed out.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Json<SessionResponse> {
    let user = match session_token(&jar) {
        Some(token) => state.sessions.validate(token).await,
        None => None,
    };
    let resp = match user {
        Some(user) => SessionResponse { status: WireSessionStatus::Authenticated, user: Some(User::from(&user)) },
        None => SessionResponse { status: WireSessionStatus::Unauthenticated, user: None },
    };
    Json(resp)
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<User> {
    Json(User::from(&auth.user))
}

#[derive(Deserialize)]
pub struct RequestCodeBody {
    email: String,
}

/// `POST /api/auth/email/request-code`: issue an access code.
pub async fn request_email_code(State(state): State<AppState>, Json(body): Json<RequestCodeBody>) -> Response {
    let Some(email) = normalize_email(&body.email) else {
        return (StatusCode::BAD_REQUEST, EmailAuthError::InvalidEmail.to_string()).into_response();
    };

    if let Err(e) = state.code_rate_limiter.check_and_record(&email) {
        tracing::warn!(error = %e, "access code request rate limited");
        return (StatusCode::TOO_MANY_REQUESTS, e.to_string()).into_response();
    }

    let code = match state.access_codes.request(&email).await {
        Ok(code) => code,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    tracing::info!("access code issued");
    if state.config.echo_access_codes {
        return Json(RequestCodeResponse { code: Some(code) }).into_response();
    }
    tracing::debug!(%email, %code, "no mail transport; deliver access code out of band");
    Json(RequestCodeResponse { code: None }).into_response()
}

#[derive(Deserialize)]
pub struct VerifyCodeBody {
    email: String,
    code: String,
}

/// `POST /api/auth/email/verify-code`: exchange a code for a session cookie.
pub async fn verify_email_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeBody>,
) -> Response {
    let user = match state.access_codes.verify(&body.email, &body.code).await {
        Ok(user) => user,
        Err(e @ (EmailAuthError::InvalidEmail | EmailAuthError::InvalidCode)) => {
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
        Err(e @ EmailAuthError::VerificationFailed) => {
            tracing::info!("access code verification failed");
            return (StatusCode::UNAUTHORIZED, e.to_string()).into_response();
        }
    };

    let token = state.sessions.create(user.clone()).await;
    tracing::info!(user_id = %user.id, "session created");

    let jar = jar.add(session_cookie(token, &state.config));
    (jar, Json(VerifyCodeResponse { user: User::from(&user) })).into_response()
}

/// `POST /api/auth/logout`: delete session if any, clear cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = session_token(&jar) {
        state.sessions.delete(token).await;
    }
    let jar = jar.add(cleared_session_cookie(&state.config));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
