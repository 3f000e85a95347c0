//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use authhub_auth::AuthService;
use authhub_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Auth service (registration, login, token verification).
    pub auth: Arc<AuthService>,
}
