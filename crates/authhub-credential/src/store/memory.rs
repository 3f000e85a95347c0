//! In-memory credential store using a Tokio lock for single-node deployments.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use authhub_core::{AppError, AppResult};

use super::CredentialStore;
use crate::principal::Principal;

/// In-memory credential store.
///
/// State lives for the process lifetime only; there is no persistence.
/// The write lock is held just for the contains+insert pair, never across
/// any hashing work, so concurrent unrelated requests are not serialized
/// behind a registration.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    /// Principals keyed by email, exact byte-for-byte match.
    principals: Arc<RwLock<HashMap<String, Principal>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            principals: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn insert(&self, principal: Principal) -> AppResult<()> {
        let mut principals = self.principals.write().await;

        if principals.contains_key(&principal.email) {
            warn!(email = %principal.email, "Rejected duplicate registration");
            return Err(AppError::conflict("Email already registered"));
        }

        info!(
            email = %principal.email,
            total = principals.len() + 1,
            "Principal stored"
        );
        principals.insert(principal.email.clone(), principal);

        Ok(())
    }

    async fn lookup(&self, email: &str) -> AppResult<Option<Principal>> {
        let principals = self.principals.read().await;
        Ok(principals.get(email).cloned())
    }

    async fn count(&self) -> AppResult<usize> {
        let principals = self.principals.read().await;
        Ok(principals.len())
    }
}
