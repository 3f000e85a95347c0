//! Credential store trait and implementations.

use async_trait::async_trait;

use authhub_core::AppResult;

use crate::principal::Principal;

pub mod memory;

pub use memory::MemoryCredentialStore;

/// Storage abstraction for registered principals.
///
/// Implementations enforce identifier uniqueness: `insert` is atomic with
/// respect to concurrent inserts and lookups on the same email, so two
/// racing registrations resolve to exactly one success. The store is
/// constructed at process start and injected into the auth service, which
/// keeps it swappable for a durable backend without touching service logic.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Adds a principal. Fails with `ErrorKind::Conflict` if a principal
    /// with the same email already exists; the existing record is left
    /// untouched and no partial state is observable.
    async fn insert(&self, principal: Principal) -> AppResult<()>;

    /// Returns the principal registered under `email`, if any. A miss is
    /// not an error.
    async fn lookup(&self, email: &str) -> AppResult<Option<Principal>>;

    /// Number of registered principals.
    async fn count(&self) -> AppResult<usize>;
}
