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

//! Axum router configuration for the documentation gateway.

pub mod docs;
pub mod oauth;

use axum::{middleware, routing::get, Router};

use crate::gate;
use crate::state::AppState;

/// Build the full application router.
///
/// The auth routes are public; everything under `/docs` is wrapped by the
/// access gate middleware before it reaches the asset handler.
pub fn router(state: AppState) -> Router {
    let protected_docs = get(docs::serve_asset).layer(middleware::from_fn_with_state(
        state.clone(),
        gate::require_session,
    ));

    Router::new()
        // OAuth / session
        .route("/api/v1/auth/google", get(oauth::login))
        .route("/api/v1/oauth2/callback/google", get(oauth::callback))
        .route("/api/v1/auth/logout", get(oauth::logout))
        // Protected documentation
        .route("/docs", protected_docs.clone())
        .route("/docs/", protected_docs.clone())
        .route("/docs/{*path}", protected_docs)
        .with_state(state)
}
