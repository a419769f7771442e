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

//! Session token (JWT) generation and validation.
//!
//! The gateway signs tokens with a shared secret at the OAuth callback and
//! validates the signature and expiry on every request to protected
//! documentation. Expired tokens are reported distinctly from tampered or
//! malformed ones because the access gate reacts differently to each.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, DecodingKey, EncodingKey, Header, Validation};

use docsgate_types::SessionTokenClaims;

use crate::error::AppError;

/// How long a session token stays valid after issuance.
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Errors that can occur during session token validation.
#[derive(Debug)]
pub enum TokenError {
    /// Token has expired (`exp` claim is in the past).
    Expired,
    /// Token could not be decoded or signature is invalid.
    Invalid(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Expired => write!(f, "session token has expired"),
            TokenError::Invalid(msg) => write!(f, "invalid session token: {msg}"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Sign a session token for the given identity.
///
/// `now` is injected by the caller so that tests can issue tokens at
/// arbitrary points in time. The token expires [`SESSION_TTL_SECS`] after
/// `now`.
pub fn issue_session_token(
    secret: &str,
    subject: &str,
    email: &str,
    now: DateTime<Utc>,
) -> Result<String, AppError> {
    let claims = SessionTokenClaims {
        sub: subject.to_string(),
        email: email.to_string(),
        exp: (now + Duration::seconds(SESSION_TTL_SECS)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Failed to sign session token: {e}");
        AppError::internal("failed to generate session token")
    })
}

/// Decode and validate a session token, extracting its claims.
///
/// Checks:
/// 1. Signature is valid (HMAC-SHA256)
/// 2. Token is not expired (`exp`)
pub fn validate_session_token(
    secret: &str,
    token: &str,
) -> Result<SessionTokenClaims, TokenError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::default();
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation.validate_exp = true;

    let token_data = jsonwebtoken::decode::<SessionTokenClaims>(token, &decoding_key, &validation)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e.to_string()),
        })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-for-unit-tests";

    #[test]
    fn fresh_token_round_trips_with_correct_claims() {
        let token = issue_session_token(TEST_SECRET, "108346", "alice@ristek.cs.ui.ac.id", Utc::now())
            .expect("should sign");

        let claims = validate_session_token(TEST_SECRET, &token).expect("should validate");
        assert_eq!(claims.sub, "108346");
        assert_eq!(claims.email, "alice@ristek.cs.ui.ac.id");
    }

    #[test]
    fn exp_is_issuance_time_plus_ttl() {
        let now = Utc::now();
        let token = issue_session_token(TEST_SECRET, "s", "a@b.com", now).expect("should sign");

        let claims = validate_session_token(TEST_SECRET, &token).expect("should validate");
        assert_eq!(claims.exp, now.timestamp() + SESSION_TTL_SECS);
    }

    #[test]
    fn token_past_ttl_is_expired() {
        // Issued 25 hours ago, so the 24h TTL has lapsed well past the
        // decoder's 60-second leeway.
        let issued = Utc::now() - Duration::hours(25);
        let token =
            issue_session_token(TEST_SECRET, "s", "a@ristek.cs.ui.ac.id", issued).expect("should sign");

        let result = validate_session_token(TEST_SECRET, &token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn wrong_secret_is_invalid_not_expired() {
        // Even an already-expired token signed with a different secret must
        // report Invalid: signature failure takes precedence over expiry.
        let issued = Utc::now() - Duration::hours(25);
        let token = issue_session_token("other-secret", "s", "a@b.com", issued).expect("should sign");

        let result = validate_session_token(TEST_SECRET, &token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn garbage_token_is_invalid() {
        let result = validate_session_token(TEST_SECRET, "not.a.jwt");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn unsigned_token_is_invalid() {
        // alg=none style payloads must never validate.
        let result = validate_session_token(TEST_SECRET, "eyJhbGciOiJub25lIn0.eyJzdWIiOiJ4In0.");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}
