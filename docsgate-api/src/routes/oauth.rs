/*
 * Copyright 2026 RISTEK Fasilkom UI
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! OAuth route handlers: login, callback, logout.
//!
//! After a successful Google login the callback issues a **signed session
//! JWT** inside an `HttpOnly; SameSite=Lax` cookie named `token`.
//! JavaScript cannot read the cookie; the browser sends it automatically on
//! every request to the documentation.

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use docsgate_types::ErrorBody;

use crate::error::AppError;
use crate::oauth;
use crate::state::AppState;
use crate::token;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// Build a 302 Found redirect to `location`.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Append a `Set-Cookie` header to `response`.
pub(crate) fn set_cookie(mut response: Response, cookie: &str) -> Response {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(e) => tracing::error!("Failed to encode Set-Cookie header: {e}"),
    }
    response
}

/// Build a `Set-Cookie` header value for the session JWT.
pub(crate) fn build_session_cookie(jwt: &str, secure: bool) -> String {
    let mut cookie = format!("token={jwt}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build a `Set-Cookie` header that clears the `token` cookie.
pub(crate) fn build_clear_session_cookie(secure: bool) -> String {
    let mut cookie = "token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0".to_string();
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: String,
}

/// GET /api/v1/auth/google
///
/// Initiates the OAuth flow by redirecting the browser to the Google
/// authorization URL. No failure path.
pub async fn login(State(state): State<AppState>) -> Response {
    found(&oauth::build_auth_url(&state.oauth))
}

/// GET /api/v1/oauth2/callback/google?code=...
///
/// Handles the OAuth callback: exchanges the authorization code for an
/// access token, fetches the identity, enforces the email domain policy,
/// then issues the session JWT and redirects to the documentation homepage.
pub async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, AppError> {
    let access_token = oauth::exchange_code_for_token(&state.oauth, &query.code).await?;
    let identity = oauth::fetch_identity(&state.oauth, &access_token).await?;

    // Only members of the organization may read the docs.
    if !identity.email.ends_with(&state.allowed_email_domain) {
        tracing::info!(
            "Rejected login for {}: outside allowed domain",
            identity.email
        );
        return Ok(Json(ErrorBody::invalid_email()).into_response());
    }

    let session_jwt = token::issue_session_token(
        &state.jwt_secret,
        &identity.sub,
        &identity.email,
        Utc::now(),
    )?;

    tracing::info!("Login successful for {}", identity.email);

    let homepage_url = format!("{}/docs/", state.base_url);
    let session_cookie = build_session_cookie(&session_jwt, state.cookie_secure);
    Ok(set_cookie(found(&homepage_url), &session_cookie))
}

/// GET /api/v1/auth/logout -- clears the session cookie.
pub async fn logout(State(state): State<AppState>) -> Response {
    let clear = build_clear_session_cookie(state.cookie_secure);
    set_cookie(StatusCode::OK.into_response(), &clear)
}
