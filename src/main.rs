//! AuthHub Server — credential issuance and verification service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use authhub_auth::{AuthService, PasswordHasher, TokenDecoder, TokenEncoder};
use authhub_core::config::AppConfig;
use authhub_core::error::AppError;
use authhub_credential::{CredentialStore, MemoryCredentialStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
///
/// The signing secret has no default; a deployment without one fails here
/// rather than serving tokens signed with a known constant.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("AUTHHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AuthHub v{}", env!("CARGO_PKG_VERSION"));

    let config = Arc::new(config);

    // ── Credential store ─────────────────────────────────────────
    // In-memory and volatile for the process lifetime. Created here and
    // injected so the auth service never reaches for ambient state; a
    // durable backend slots in behind the same trait.
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());

    // ── Auth service ─────────────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new());
    let encoder = Arc::new(TokenEncoder::new(&config.auth));
    let decoder = Arc::new(TokenDecoder::new(&config.auth));
    let auth = Arc::new(AuthService::new(store, hasher, encoder, decoder));

    let state = authhub_api::state::AppState {
        config: Arc::clone(&config),
        auth,
    };

    let app = authhub_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("AuthHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("AuthHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
