//! Claims structure embedded in session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims payload embedded in every session token.
///
/// Carries exactly what the issuer is willing to assert about the bearer.
/// Any mutation of a field invalidates the token's signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the principal's email.
    pub sub: String,
    /// Display name at the time of issuance.
    pub name: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the email from the subject claim.
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Returns the display name.
    pub fn full_name(&self) -> &str {
        &self.name
    }

    /// Returns the issuance time as a `DateTime<Utc>`.
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_else(Utc::now)
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
