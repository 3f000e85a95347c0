//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
///
/// `token_secret` deliberately has no serde default: the signing key must
/// come from runtime configuration, and rotating it invalidates every
/// outstanding token at once (single-key design, no verification window
/// for old keys).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Required.
    pub token_secret: String,
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
}

fn default_token_ttl() -> u64 {
    60
}
