//! Response DTOs.
//!
//! Body shapes here are the external contract: flat objects, camelCase
//! fields, `{error}` on failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity view embedded in login and session responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    /// Email.
    pub email: String,
    /// Display name.
    pub full_name: String,
}

/// Registration success body. Carries no token: registration never
/// auto-issues a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Always true on the success path.
    pub success: bool,
}

/// Login success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Serialized signed session token.
    pub token: String,
    /// The authenticated identity.
    pub user: UserView,
}

/// Decoded-claims body for authenticated calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// The identity the token asserts.
    pub user: UserView,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
