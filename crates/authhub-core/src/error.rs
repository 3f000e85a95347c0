//! Unified application error types for AuthHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
///
/// The three token kinds stay distinguishable here so the verification
/// pipeline can report exactly which check failed; collapsing them into a
/// single opaque outcome is the HTTP boundary's job, not this crate's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Input validation failed (missing or malformed field).
    Validation,
    /// Credential verification failed (unknown identity or wrong password).
    Authentication,
    /// A conflict occurred (duplicate identifier).
    Conflict,
    /// A presented token could not be parsed or decoded at all.
    TokenMalformed,
    /// A presented token parsed but its signature did not verify.
    TokenSignature,
    /// A presented token carried a valid signature but has expired.
    TokenExpired,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Whether this kind is one of the token verification failures.
    pub fn is_token_error(self) -> bool {
        matches!(
            self,
            Self::TokenMalformed | Self::TokenSignature | Self::TokenExpired
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::TokenMalformed => write!(f, "TOKEN_MALFORMED"),
            Self::TokenSignature => write!(f, "TOKEN_SIGNATURE"),
            Self::TokenExpired => write!(f, "TOKEN_EXPIRED"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout AuthHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary. Errors are always returned as values;
/// a malformed request must never take the service down.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a malformed-token error.
    pub fn token_malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenMalformed, message)
    }

    /// Create a bad-signature token error.
    pub fn token_signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenSignature, message)
    }

    /// Create an expired-token error.
    pub fn token_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenExpired, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::TokenExpired.to_string(), "TOKEN_EXPIRED");
        assert_eq!(ErrorKind::Authentication.to_string(), "AUTHENTICATION");
    }

    #[test]
    fn test_is_token_error() {
        assert!(ErrorKind::TokenMalformed.is_token_error());
        assert!(ErrorKind::TokenSignature.is_token_error());
        assert!(ErrorKind::TokenExpired.is_token_error());
        assert!(!ErrorKind::Authentication.is_token_error());
    }

    #[test]
    fn test_clone_drops_source() {
        let err = AppError::with_source(
            ErrorKind::Internal,
            "wrapped",
            std::io::Error::new(std::io::ErrorKind::Other, "inner"),
        );
        let cloned = err.clone();
        assert_eq!(cloned.kind, ErrorKind::Internal);
        assert!(cloned.source.is_none());
    }
}
