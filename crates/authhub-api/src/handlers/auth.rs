//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, RegisterResponse, SessionResponse, UserView};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    state
        .auth
        .register(&req.full_name, &req.email, &req.password)
        .await?;

    Ok(Json(RegisterResponse { success: true }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state.auth.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: UserView {
            email: result.identity.email,
            full_name: result.identity.full_name,
        },
    }))
}

/// GET /api/auth/me
///
/// Returns the claims decoded from the presented token. Stateless: the
/// extractor has already done all the checking there is to do.
pub async fn me(auth: AuthUser) -> Json<SessionResponse> {
    let claims = auth.0;

    Json(SessionResponse {
        user: UserView {
            email: claims.sub.clone(),
            full_name: claims.name.clone(),
        },
        issued_at: claims.issued_at(),
        expires_at: claims.expires_at(),
    })
}
