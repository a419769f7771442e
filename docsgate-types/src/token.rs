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

//! Session token (JWT) claims.
//!
//! The session token is a signed JWT (HMAC-SHA256) proving a completed
//! Google login. The gateway signs it at the OAuth callback and validates
//! it on every request to protected documentation. The client holds it in
//! an `HttpOnly` cookie named `token`; nothing is persisted server-side.

use serde::{Deserialize, Serialize};

/// JWT payload for a documentation session token.
///
/// # Example payload
///
/// ```json
/// {
///   "sub": "108346723...",
///   "email": "user@ristek.cs.ui.ac.id",
///   "exp": 1786500000
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionTokenClaims {
    /// Google account identifier (`sub` from the UserInfo endpoint).
    pub sub: String,

    /// The authenticated email address.
    pub email: String,

    /// Expiration timestamp (Unix seconds).
    /// Token is rejected after this time.
    pub exp: i64,
}
