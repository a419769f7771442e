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

//! Access gate for the protected documentation.
//!
//! Every request targeting `/docs` passes through [`require_session`]
//! before reaching the asset handler. The decision itself lives in
//! [`evaluate`], a pure function of the cookie value and the current time,
//! so it can be tested without an HTTP stack.
//!
//! Outcomes:
//! - no token → redirect to the login route, no cookie mutation
//! - valid token → forward to the asset handler
//! - expired token → clear the cookie and redirect to the login route
//! - invalid token → 401. Tampering or malformed state, not normal expiry,
//!   so it is never silently downgraded to a redirect.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::routes::oauth::{build_clear_session_cookie, found, set_cookie};
use crate::state::AppState;
use crate::token::{validate_session_token, TokenError};

/// Per-request gate decision.
#[derive(Debug)]
pub enum GateOutcome {
    /// Token validates; forward the request to the asset handler.
    Allow,
    /// No token present; send the visitor to the login route.
    RedirectToLogin,
    /// Token expired; clear the cookie and send the visitor to login.
    ExpiredRedirect,
    /// Token failed signature or format validation.
    Unauthorized(String),
}

/// Extract the `token` cookie value from the request headers.
///
/// An empty value counts as no token at all.
pub fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    let cookie_header = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    for pair in cookie_header.split(';') {
        let pair = pair.trim();
        if let Some(value) = pair.strip_prefix("token=") {
            let token = value.trim();
            if !token.is_empty() {
                return Some(token);
            }
        }
    }

    None
}

/// Decide what to do with a request to protected content.
///
/// Pure function of (cookie value, current time): evaluating twice on the
/// same request produces the same outcome.
pub fn evaluate(secret: &str, token: Option<&str>) -> GateOutcome {
    match token {
        None => GateOutcome::RedirectToLogin,
        Some(token) => match validate_session_token(secret, token) {
            Ok(_) => GateOutcome::Allow,
            Err(TokenError::Expired) => GateOutcome::ExpiredRedirect,
            Err(TokenError::Invalid(msg)) => GateOutcome::Unauthorized(msg),
        },
    }
}

/// Middleware wrapping the documentation asset handler.
pub async fn require_session(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match evaluate(&state.jwt_secret, session_cookie(req.headers())) {
        GateOutcome::Allow => next.run(req).await,
        GateOutcome::RedirectToLogin => found(&state.login_url()),
        GateOutcome::ExpiredRedirect => {
            let clear = build_clear_session_cookie(state.cookie_secure);
            set_cookie(found(&state.login_url()), &clear)
        }
        GateOutcome::Unauthorized(msg) => {
            tracing::warn!("Rejected request with invalid session token: {msg}");
            AppError::unauthorized().into_response()
        }
    }
}
