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

//! Integration tests for the login and callback flows.
//!
//! The Google endpoints are stood in for by a wiremock server; the router,
//! handlers, token issuance, and cookie handling are all real.


use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use docsgate_api::token::validate_session_token;
use docsgate_types::ErrorBody;
use test_helpers::*;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount a token endpoint answering with `access_token`.
async fn mock_token_endpoint(server: &MockServer, access_token: &str) {
    Mock::given(method("POST"))
        .and(path("/o/oauth2/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("client_id=test-client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": access_token,
            "token_type": "Bearer",
            "expires_in": 3599,
        })))
        .mount(server)
        .await;
}

/// Mount a UserInfo endpoint answering with the given identity.
async fn mock_userinfo_endpoint(server: &MockServer, sub: &str, email: &str) {
    Mock::given(method("GET"))
        .and(path("/oauth2/v3/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sub": sub,
            "email": email,
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_redirects_to_the_provider_authorization_url() {
    let app = build_app(test_oauth_config("https://accounts.google.test"));

    let req = Request::builder()
        .method("GET")
        .uri("/api/v1/auth/google")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("login must redirect");
    assert!(location.starts_with("https://accounts.google.test/o/oauth2/auth?"));
    assert!(location.contains("response_type=code"));
    assert!(location.contains("client_id=test-client"));
    assert!(location.contains("scope=email"));
    assert!(location.contains("prompt=select_account"));
}

#[tokio::test]
async fn callback_with_org_email_sets_cookie_and_redirects_to_docs() {
    let server = MockServer::start().await;
    mock_token_endpoint(&server, "provider-access-token").await;
    mock_userinfo_endpoint(&server, "108346", "alice@ristek.cs.ui.ac.id").await;

    let app = build_app(test_oauth_config(&server.uri()));
    let req = Request::builder()
        .method("GET")
        .uri("/api/v1/oauth2/callback/google?code=auth-code-123")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("http://docs.test/docs/")
    );

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("successful login must set the session cookie");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));

    // The minted cookie must validate and carry the authenticated identity.
    let jwt = cookie_token_value(set_cookie);
    let claims = validate_session_token(TEST_JWT_SECRET, jwt).expect("cookie token must validate");
    assert_eq!(claims.sub, "108346");
    assert_eq!(claims.email, "alice@ristek.cs.ui.ac.id");
}

#[tokio::test]
async fn callback_with_outside_email_rejects_and_issues_no_cookie() {
    let server = MockServer::start().await;
    mock_token_endpoint(&server, "provider-access-token").await;
    mock_userinfo_endpoint(&server, "999", "user@evil.com").await;

    let app = build_app(test_oauth_config(&server.uri()));
    let req = Request::builder()
        .method("GET")
        .uri("/api/v1/oauth2/callback/google?code=auth-code-123")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert!(resp.headers().get(header::SET_COOKIE).is_none());
    assert!(resp.headers().get(header::LOCATION).is_none());

    let body: ErrorBody = response_json(resp).await;
    assert_eq!(body.error, "Invalid email, must be a ristek email");
}

#[tokio::test]
async fn callback_surfaces_token_exchange_failure_as_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/o/oauth2/token"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let app = build_app(test_oauth_config(&server.uri()));
    let req = Request::builder()
        .method("GET")
        .uri("/api/v1/oauth2/callback/google?code=auth-code-123")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: ErrorBody = response_json(resp).await;
    assert!(body.error.starts_with("Failed to authenticate:"));
}

#[tokio::test]
async fn callback_surfaces_missing_email_as_500() {
    let server = MockServer::start().await;
    mock_token_endpoint(&server, "provider-access-token").await;
    Mock::given(method("GET"))
        .and(path("/oauth2/v3/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sub": "108346",
        })))
        .mount(&server)
        .await;

    let app = build_app(test_oauth_config(&server.uri()));
    let req = Request::builder()
        .method("GET")
        .uri("/api/v1/oauth2/callback/google?code=auth-code-123")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: ErrorBody = response_json(resp).await;
    assert!(body.error.contains("missing email"));
}

#[tokio::test]
async fn callback_without_code_is_a_bad_request() {
    let app = build_app(test_oauth_config("http://127.0.0.1:1"));
    let req = Request::builder()
        .method("GET")
        .uri("/api/v1/oauth2/callback/google")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
