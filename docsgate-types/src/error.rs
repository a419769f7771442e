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

//! API error body.
//!
//! Every failed (or rejected) response from the gateway carries a JSON body
//! of the form `{"error": "<message>"}`.

use serde::{Deserialize, Serialize};

/// Structured error payload returned by the gateway.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Rejection for identities outside the allowed email domain.
    pub fn invalid_email() -> Self {
        Self::new("Invalid email, must be a ristek email")
    }

    /// Generic unauthorized response for tampered or malformed tokens.
    pub fn unauthorized() -> Self {
        Self::new("Unauthorized")
    }

    /// Upstream OAuth provider failure, carrying the provider's detail text.
    pub fn auth_failed(detail: &str) -> Self {
        Self::new(format!("Failed to authenticate: {detail}"))
    }
}
