//! Session token codec.
//!
//! Tokens are signed (HMAC-SHA256) assertions of identity claims with a
//! fixed one-hour lifetime. They are never persisted server-side: validity
//! is a pure function of the token bytes and the signing secret.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::TokenDecoder;
pub use encoder::{IssuedToken, TokenEncoder};
