//! # authhub-credential
//!
//! The credential store for AuthHub: the [`Principal`] record and the
//! [`CredentialStore`] trait with an in-memory implementation.
//!
//! The store is the single authority on identifier uniqueness. It exposes
//! exactly two operations — insert and lookup — because no in-scope flow
//! updates or deletes a registered principal.

pub mod principal;
pub mod store;

pub use principal::Principal;
pub use store::{CredentialStore, MemoryCredentialStore};
