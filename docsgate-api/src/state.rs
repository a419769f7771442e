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

//! Shared application state passed to every Axum handler via `State`.

use crate::config::{Config, OAuthConfig};

/// Application state shared across all request handlers.
///
/// Everything in here is read-only after startup; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// Public base URL of this deployment (no trailing slash).
    pub base_url: String,
    /// Session token signing secret.
    pub jwt_secret: String,
    /// Directory holding the generated documentation site.
    pub docs_dir: String,
    /// Email domain suffix required for a login to succeed.
    pub allowed_email_domain: String,
    /// Whether to set the `Secure` attribute on the session cookie.
    pub cookie_secure: bool,
    /// Google OAuth configuration.
    pub oauth: OAuthConfig,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            jwt_secret: config.jwt_secret.clone(),
            docs_dir: config.docs_dir.clone(),
            allowed_email_domain: config.allowed_email_domain.clone(),
            cookie_secure: config.deployed,
            oauth: config.oauth.clone(),
        }
    }

    /// URL of the login route, where unauthenticated visitors are sent.
    pub fn login_url(&self) -> String {
        format!("{}/api/v1/auth/google", self.base_url)
    }
}
