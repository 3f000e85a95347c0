//! # authhub-api
//!
//! HTTP boundary for AuthHub: DTOs, handlers, the bearer-token extractor,
//! error-to-status mapping, and the router.
//!
//! This crate renders nothing. The presentation client is an external
//! collaborator that forwards requests and displays results; every
//! credential decision is made on this side of the wire.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
