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

//! Application configuration loaded from environment variables.

use std::env;

/// Path the OAuth provider redirects back to after login.
pub const CALLBACK_PATH: &str = "/api/v1/oauth2/callback/google";

/// Configuration for the documentation gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8080").
    pub listen_addr: String,
    /// Public base URL of this deployment (no trailing slash).
    pub base_url: String,
    /// Secret used to sign session tokens (HMAC-SHA256).
    pub jwt_secret: String,
    /// Directory holding the generated documentation site.
    pub docs_dir: String,
    /// Email domain suffix required for a login to succeed.
    pub allowed_email_domain: String,
    /// Whether this process runs behind the production deployment.
    /// Controls the `Secure` attribute on the session cookie.
    pub deployed: bool,
    /// Google OAuth configuration.
    pub oauth: OAuthConfig,
}

/// Google OAuth configuration.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required
    /// - `BASE_URL`
    /// - `GOOGLE_CLIENT_ID`
    /// - `GOOGLE_CLIENT_SECRET`
    /// - `JWT_SECRET`
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8080"`)
    /// - `DOCS_DIR` (default: `"site"`)
    /// - `ALLOWED_EMAIL_DOMAIN` (default: `"@ristek.cs.ui.ac.id"`)
    /// - `DEPLOYED_ON_VERCEL` (`"1"`, `"true"` or `"True"` enable it)
    /// - `OAUTH_AUTH_URL`, `OAUTH_TOKEN_URL`, `OAUTH_USERINFO_URL`
    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("BASE_URL").map_err(|_| "BASE_URL environment variable is required")?;
        let client_id = env::var("GOOGLE_CLIENT_ID")
            .map_err(|_| "GOOGLE_CLIENT_ID environment variable is required")?;
        let client_secret = env::var("GOOGLE_CLIENT_SECRET")
            .map_err(|_| "GOOGLE_CLIENT_SECRET environment variable is required")?;
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| "JWT_SECRET environment variable is required")?;

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let docs_dir = env::var("DOCS_DIR").unwrap_or_else(|_| "site".to_string());
        let allowed_email_domain = env::var("ALLOWED_EMAIL_DOMAIN")
            .unwrap_or_else(|_| "@ristek.cs.ui.ac.id".to_string());
        let deployed = matches!(
            env::var("DEPLOYED_ON_VERCEL").as_deref(),
            Ok("1") | Ok("true") | Ok("True")
        );

        let oauth = OAuthConfig {
            client_id,
            client_secret,
            redirect_url: format!("{base_url}{CALLBACK_PATH}"),
            auth_url: env::var("OAUTH_AUTH_URL")
                .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string()),
            token_url: env::var("OAUTH_TOKEN_URL")
                .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/token".to_string()),
            userinfo_url: env::var("OAUTH_USERINFO_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/userinfo".to_string()),
        };

        Ok(Self {
            listen_addr,
            base_url,
            jwt_secret,
            docs_dir,
            allowed_email_domain,
            deployed,
            oauth,
        })
    }
}
