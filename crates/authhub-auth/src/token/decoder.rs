//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use authhub_core::config::auth::AuthConfig;
use authhub_core::error::AppError;

use super::claims::Claims;

/// Validates session tokens.
///
/// The signature is checked before any claim is interpreted: an altered
/// payload is rejected as a signature failure, and only a token whose
/// signature verifies can fail on expiry.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token string.
    ///
    /// Failure kinds stay distinguishable for callers:
    /// - `TokenMalformed` — the token cannot be parsed or decoded at all
    /// - `TokenSignature` — it parsed, but the signature does not match
    /// - `TokenExpired` — the signature is valid but `exp` is in the past
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::token_expired("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::token_signature("Token signature mismatch")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken
                    | jsonwebtoken::errors::ErrorKind::Base64(_)
                    | jsonwebtoken::errors::ErrorKind::Json(_)
                    | jsonwebtoken::errors::ErrorKind::Utf8(_) => {
                        AppError::token_malformed("Token could not be decoded")
                    }
                    _ => AppError::token_malformed(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}
