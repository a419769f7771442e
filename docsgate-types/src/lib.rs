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

//! Shared API types for the docsgate documentation gateway.
//!
//! This crate defines the wire contract between the gateway and its
//! consumers (browsers, integration tests). It is intentionally
//! framework-agnostic — no axum, no HTTP types.

pub mod error;
pub mod token;

pub use error::ErrorBody;
pub use token::SessionTokenClaims;
