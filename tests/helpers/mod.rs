//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use authhub_api::router::build_router;
use authhub_api::state::AppState;
use authhub_auth::{AuthService, PasswordHasher, TokenDecoder, TokenEncoder};
use authhub_core::config::AppConfig;
use authhub_core::config::app::ServerConfig;
use authhub_core::config::auth::AuthConfig;
use authhub_core::config::logging::LoggingConfig;
use authhub_credential::{CredentialStore, MemoryCredentialStore};

/// Signing secret used across the test suite. Tests that forge tokens sign
/// with this to get past the signature check.
pub const TEST_SECRET: &str = "integration-test-signing-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The auth service, for driving flows below the HTTP layer
    pub auth: Arc<AuthService>,
    /// Application config
    pub config: AppConfig,
}

/// Builds the test configuration with an in-memory-friendly setup.
pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        auth: AuthConfig {
            token_secret: TEST_SECRET.to_string(),
            token_ttl_minutes: 60,
        },
        logging: LoggingConfig::default(),
    }
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub fn new() -> Self {
        let config = test_config();

        let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
        let hasher = Arc::new(PasswordHasher::new());
        let encoder = Arc::new(TokenEncoder::new(&config.auth));
        let decoder = Arc::new(TokenDecoder::new(&config.auth));
        let auth = Arc::new(AuthService::new(store, hasher, encoder, decoder));

        let state = AppState {
            config: Arc::new(config.clone()),
            auth: Arc::clone(&auth),
        };

        let router = build_router(state);

        Self {
            router,
            auth,
            config,
        }
    }

    /// Register a principal through the HTTP API
    pub async fn register(&self, full_name: &str, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "fullName": full_name,
                "email": email,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Login and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
