//! # authhub-auth
//!
//! Authentication for AuthHub: credential registration and verification,
//! and issuance/verification of signed, time-bounded session tokens.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `token` — session token creation and validation (HMAC-SHA256)
//! - `service` — the auth service orchestrating the credential store

pub mod password;
pub mod service;
pub mod token;

pub use password::PasswordHasher;
pub use service::{AuthService, IdentityView, LoginResult};
pub use token::{Claims, TokenDecoder, TokenEncoder};
