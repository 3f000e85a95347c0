//! Integration tests for session token integrity and expiry.

mod helpers;

use axum::http::StatusCode;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

/// All token rejections surface as the same opaque body; which internal
/// check failed must not be observable from the outside.
const INVALID_SESSION: &str = "Invalid session";

#[tokio::test]
async fn test_token_roundtrip_preserves_claims() {
    let app = helpers::TestApp::new();
    app.register("Ada Lovelace", "ada@example.com", "secret123")
        .await;
    let token = app.login("ada@example.com", "secret123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let user = response.body.get("user").unwrap();
    assert_eq!(user.get("email").unwrap().as_str().unwrap(), "ada@example.com");
    assert_eq!(
        user.get("fullName").unwrap().as_str().unwrap(),
        "Ada Lovelace"
    );
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let app = helpers::TestApp::new();
    app.register("Ada Lovelace", "ada@example.com", "secret123")
        .await;
    let token = app.login("ada@example.com", "secret123").await;

    // Flip a single character inside the payload segment.
    let payload_start = token.find('.').unwrap() + 1;
    let mut bytes = token.clone().into_bytes();
    bytes[payload_start + 4] = if bytes[payload_start + 4] == b'A' {
        b'B'
    } else {
        b'A'
    };
    let tampered = String::from_utf8(bytes).unwrap();
    assert_ne!(tampered, token);

    let response = app
        .request("GET", "/api/auth/me", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        INVALID_SESSION
    );
}

#[tokio::test]
async fn test_expired_token_is_rejected_despite_valid_signature() {
    let app = helpers::TestApp::new();

    // Forge a token signed with the real test secret but already expired.
    let now = Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": "ada@example.com",
        "name": "Ada Lovelace",
        "iat": now - 7200,
        "exp": now - 3600,
    });
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(helpers::TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        INVALID_SESSION
    );
}

#[tokio::test]
async fn test_token_signed_with_wrong_secret_is_rejected() {
    let app = helpers::TestApp::new();

    let now = Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": "ada@example.com",
        "name": "Ada Lovelace",
        "iat": now,
        "exp": now + 3600,
    });
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        INVALID_SESSION
    );
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        INVALID_SESSION
    );
}
