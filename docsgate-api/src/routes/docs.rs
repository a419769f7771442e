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

//! Static asset handler for the generated documentation site.
//!
//! The access gate middleware runs before this handler; by the time a
//! request lands here it carries a valid session token.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::error::AppError;
use crate::state::AppState;

/// Serve a documentation asset from the configured site directory.
///
/// `ServeDir` implements `tower::Service`, so each request is dispatched
/// with `tower::ServiceExt::oneshot` against a request whose path has the
/// `/docs` prefix stripped. Directory paths get their `index.html` served
/// (ServeDir's default), matching how the site generator links pages.
pub async fn serve_asset(State(state): State<AppState>, uri: Uri) -> Response {
    let path = match uri.path().strip_prefix("/docs") {
        Some("") => "/",
        Some(stripped) => stripped,
        None => uri.path(),
    };

    let req = match Request::builder().uri(path).body(Body::empty()) {
        Ok(req) => req,
        Err(e) => {
            return AppError::internal(&format!("invalid asset path: {e}")).into_response();
        }
    };

    match ServeDir::new(&state.docs_dir).oneshot(req).await {
        Ok(res) => reanchor_redirect(res.map(Body::new)),
        Err(err) => {
            AppError::internal(&format!("failed to serve asset: {err}")).into_response()
        }
    }
}

/// ServeDir issues same-origin redirects (appending a trailing slash to
/// directory paths) relative to the stripped path; re-anchor them under
/// `/docs` so the browser stays inside the protected mount.
fn reanchor_redirect(mut response: Response) -> Response {
    if !response.status().is_redirection() {
        return response;
    }

    let fixed = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .filter(|loc| loc.starts_with('/') && !loc.starts_with("/docs"))
        .map(|loc| format!("/docs{loc}"));

    if let Some(location) = fixed {
        match HeaderValue::from_str(&location) {
            Ok(value) => {
                response.headers_mut().insert(header::LOCATION, value);
            }
            Err(e) => {
                tracing::error!("Failed to re-anchor redirect location: {e}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    }

    response
}
