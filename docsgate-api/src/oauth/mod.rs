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

//! Google OAuth2 helpers: authorization URL construction, authorization
//! code → access token exchange, and identity (UserInfo) fetch.

pub mod claims;
pub mod exchange;

pub use claims::{fetch_identity, Identity};
pub use exchange::{build_auth_url, exchange_code_for_token, OAuthTokenResponse};
