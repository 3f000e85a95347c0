//! The auth service — registration, login, and token verification.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use authhub_core::error::AppError;
use authhub_core::result::AppResult;
use authhub_credential::{CredentialStore, Principal};

use crate::password::PasswordHasher;
use crate::token::{Claims, TokenDecoder, TokenEncoder};

/// Uniform login failure message. Unknown email and wrong password produce
/// byte-identical errors so the response cannot be used to probe which
/// emails are registered. Do not split this into separate messages.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Plain identity view returned alongside an issued token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IdentityView {
    /// Principal's email.
    pub email: String,
    /// Principal's display name.
    pub full_name: String,
}

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResult {
    /// Serialized signed session token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// The authenticated identity.
    pub identity: IdentityView,
}

/// Stateless auth logic over the credential store.
///
/// Owns no persistent state of its own: principals live in the injected
/// store, and session state lives entirely in the tokens it issues. All
/// collaborators arrive `Arc`-wrapped so the service is cheap to clone
/// across request handlers.
#[derive(Clone)]
pub struct AuthService {
    /// Registered principals.
    store: Arc<dyn CredentialStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuance.
    encoder: Arc<TokenEncoder>,
    /// Token verification.
    decoder: Arc<TokenDecoder>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("encoder", &self.encoder)
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl AuthService {
    /// Creates a new auth service with all required dependencies.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<TokenEncoder>,
        decoder: Arc<TokenDecoder>,
    ) -> Self {
        Self {
            store,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Registers a new principal.
    ///
    /// 1. Validate required fields, in order; the first empty field is the
    ///    only one reported
    /// 2. Hash the password (random salt, deliberately expensive)
    /// 3. Atomically insert into the store; a duplicate email is a conflict
    ///
    /// Registration issues no token: the caller logs in afterwards.
    pub async fn register(&self, full_name: &str, email: &str, password: &str) -> AppResult<()> {
        require_field("fullName", full_name)?;
        require_field("email", email)?;
        require_field("password", password)?;

        // Argon2 is CPU-bound; keep it off the async workers, and finish it
        // before the store is touched so no lock spans the hash.
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let secret_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))??;

        self.store
            .insert(Principal::new(email, full_name, secret_hash))
            .await?;

        info!(email = %email, "Principal registered");

        Ok(())
    }

    /// Verifies credentials and issues a session token.
    ///
    /// 1. Look up the principal; a miss fails exactly like a wrong password
    /// 2. Verify the password against the stored hash
    /// 3. Issue a signed token with a fixed one-hour lifetime
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        let principal = self
            .store
            .lookup(email)
            .await?
            .ok_or_else(|| AppError::authentication(INVALID_CREDENTIALS))?;

        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let secret_hash = principal.secret_hash.clone();
        let password_valid =
            tokio::task::spawn_blocking(move || hasher.verify(&password, &secret_hash))
                .await
                .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))??;

        if !password_valid {
            warn!(email = %email, "Failed login attempt");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let issued = self.encoder.issue(&principal.email, &principal.full_name)?;

        info!(email = %principal.email, "Login successful");

        Ok(LoginResult {
            token: issued.token,
            expires_at: issued.claims.expires_at(),
            identity: IdentityView {
                email: principal.email,
                full_name: principal.full_name,
            },
        })
    }

    /// Verifies a presented token and returns its claims unchanged.
    ///
    /// Pure: a function of the token and the signing secret only. Consults
    /// no store, so it is safe to run fully in parallel.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        self.decoder.decode(token)
    }
}

/// Rejects an empty required field, naming it.
fn require_field(name: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{name} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use authhub_core::config::auth::AuthConfig;
    use authhub_core::error::ErrorKind;
    use authhub_credential::MemoryCredentialStore;

    fn service() -> AuthService {
        let config = AuthConfig {
            token_secret: "service-test-secret".to_string(),
            token_ttl_minutes: 60,
        };
        AuthService::new(
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(PasswordHasher::new()),
            Arc::new(TokenEncoder::new(&config)),
            Arc::new(TokenDecoder::new(&config)),
        )
    }

    #[tokio::test]
    async fn test_register_login_verify_roundtrip() {
        let auth = service();

        auth.register("Ada Lovelace", "ada@example.com", "secret123")
            .await
            .unwrap();

        let result = auth.login("ada@example.com", "secret123").await.unwrap();
        assert_eq!(result.identity.email, "ada@example.com");
        assert_eq!(result.identity.full_name, "Ada Lovelace");

        let claims = auth.verify(&result.token).unwrap();
        assert_eq!(claims.email(), "ada@example.com");
        assert_eq!(claims.full_name(), "Ada Lovelace");
        assert!(!claims.is_expired());
    }

    #[tokio::test]
    async fn test_missing_fields_reported_in_order() {
        let auth = service();

        let err = auth.register("", "", "").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "fullName is required");

        let err = auth.register("Ada", "", "").await.unwrap_err();
        assert_eq!(err.message, "email is required");

        let err = auth.register("Ada", "ada@example.com", "").await.unwrap_err();
        assert_eq!(err.message, "password is required");

        // Nothing was stored along the way.
        let err = auth.login("ada@example.com", "anything").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_a_conflict() {
        let auth = service();

        auth.register("Ada Lovelace", "ada@example.com", "secret123")
            .await
            .unwrap();

        let err = auth
            .register("Someone Else", "ada@example.com", "other-password")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        // The original credentials still work; the new ones never took.
        auth.login("ada@example.com", "secret123").await.unwrap();
        let err = auth
            .login("ada@example.com", "other-password")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_fail_identically() {
        let auth = service();

        auth.register("Ada Lovelace", "ada@example.com", "secret123")
            .await
            .unwrap();

        let wrong_password = auth.login("ada@example.com", "wrong").await.unwrap_err();
        let unknown_email = auth.login("nobody@example.com", "wrong").await.unwrap_err();

        assert_eq!(wrong_password.kind, ErrorKind::Authentication);
        assert_eq!(unknown_email.kind, ErrorKind::Authentication);
        assert_eq!(wrong_password.message, unknown_email.message);
        assert_eq!(wrong_password.message, "Invalid email or password");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_yield_one_success() {
        let auth = Arc::new(service());

        let mut handles = Vec::new();
        for i in 0..8 {
            let auth = Arc::clone(&auth);
            handles.push(tokio::spawn(async move {
                auth.register("Racer", "race@example.com", &format!("password-{i}"))
                    .await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }
}
