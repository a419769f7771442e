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

//! Identity (UserInfo endpoint) helpers.

use serde::Deserialize;

use crate::config::OAuthConfig;
use crate::error::AppError;

/// Raw response from the UserInfo endpoint.
///
/// Google always returns `sub`; `email` is only present when the `email`
/// scope was granted, so it is validated before building an [`Identity`].
#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

/// Authenticated identity fetched from the provider during callback
/// handling. Exists only within the callback request's lifetime.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Provider account identifier.
    pub sub: String,
    /// Verified email address.
    pub email: String,
}

/// Fetch the authenticated identity from the provider's UserInfo endpoint.
///
/// Fails under the same conditions as the token exchange (non-success
/// status, network failure) and additionally when the response lacks an
/// email address.
pub async fn fetch_identity(
    oauth: &OAuthConfig,
    access_token: &str,
) -> Result<Identity, AppError> {
    let client = reqwest::Client::new();

    let response = client
        .get(&oauth.userinfo_url)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| AppError::auth_failed(&format!("UserInfo request failed: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!("UserInfo request failed. Status: {status}, Body: {body}");
        return Err(AppError::auth_failed(&format!(
            "UserInfo request failed with status {status}"
        )));
    }

    let user_info: UserInfoResponse = response
        .json()
        .await
        .map_err(|e| AppError::auth_failed(&format!("Failed to parse UserInfo response: {e}")))?;

    let email = user_info
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::auth_failed("UserInfo response missing email"))?;

    Ok(Identity {
        sub: user_info.sub,
        email,
    })
}
