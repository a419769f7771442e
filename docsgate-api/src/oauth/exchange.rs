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

//! Auth URL construction and authorization code → token exchange.

use serde::Deserialize;
use url::Url;

use crate::config::OAuthConfig;
use crate::error::AppError;

/// Raw response from the OAuth token endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct OAuthTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u32>,
}

/// Build the Google authorization URL the login route redirects to.
///
/// Pure function of the configuration: identical configuration yields a
/// byte-identical URL. Parameters are properly URL-encoded.
pub fn build_auth_url(oauth: &OAuthConfig) -> String {
    let mut url = Url::parse(&oauth.auth_url).expect("OAUTH_AUTH_URL must be a valid URL");

    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("response_type", "code");
        pairs.append_pair("client_id", &oauth.client_id);
        pairs.append_pair("redirect_uri", &oauth.redirect_url);
        pairs.append_pair("scope", "email");
        pairs.append_pair("access_type", "offline");
        pairs.append_pair("prompt", "select_account");
    }

    url.to_string()
}

/// Exchange an authorization code for a provider access token.
///
/// A non-success status or network failure is terminal for the request; the
/// upstream detail text is surfaced to the caller and never retried.
pub async fn exchange_code_for_token(
    oauth: &OAuthConfig,
    authorization_code: &str,
) -> Result<String, AppError> {
    let client = reqwest::Client::new();
    let params = [
        ("code", authorization_code),
        ("client_id", oauth.client_id.as_str()),
        ("client_secret", oauth.client_secret.as_str()),
        ("redirect_uri", oauth.redirect_url.as_str()),
        ("grant_type", "authorization_code"),
    ];

    let response = client
        .post(&oauth.token_url)
        .form(&params)
        .send()
        .await
        .map_err(|e| AppError::auth_failed(&format!("OAuth token request failed: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!("OAuth token request failed. Status: {status}, Body: {body}");
        return Err(AppError::auth_failed(&format!(
            "OAuth token request failed with status {status}"
        )));
    }

    let token_response: OAuthTokenResponse = response
        .json()
        .await
        .map_err(|e| AppError::auth_failed(&format!("Failed to parse OAuth response: {e}")))?;

    Ok(token_response.access_token)
}
