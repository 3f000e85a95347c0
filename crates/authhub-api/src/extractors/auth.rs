//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, verifies it, and injects the decoded claims.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use authhub_auth::Claims;
use authhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
///
/// Verification is a pure check of the token against the signing secret;
/// there is no server-side session table to consult, so the token's own
/// validity is the only gate.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the verified claims.
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.auth.verify(token)?;

        Ok(AuthUser(claims))
    }
}
