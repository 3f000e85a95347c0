//! The registered-identity record owned by the credential store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered identity.
///
/// Immutable once created: there is no profile-edit flow, so the only way
/// a field changes is a failed re-registration, which never touches the
/// stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier (email address), case-sensitive as received.
    pub email: String,
    /// Display name captured at registration.
    pub full_name: String,
    /// PHC-format Argon2id hash of the password. Opaque: only ever passed
    /// to the hash verify operation, never compared by equality.
    pub secret_hash: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl Principal {
    /// Creates a new principal stamped with the current time.
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        secret_hash: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            secret_hash: secret_hash.into(),
            created_at: Utc::now(),
        }
    }
}
