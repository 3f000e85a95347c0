//! Request DTOs.
//!
//! Fields are `#[serde(default)]` so an absent field deserializes as empty
//! and surfaces as the service's own missing-field error instead of a
//! deserialization rejection.

use serde::{Deserialize, Serialize};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Email — the unique identifier.
    #[serde(default)]
    pub email: String,
    /// Plaintext password; hashed before it reaches the store.
    #[serde(default)]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email.
    #[serde(default)]
    pub email: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}
