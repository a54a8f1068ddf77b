//! JWT claim structure for access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The claim set carried inside a signed access token.
///
/// Created only by the identity issuer; verified (never mutated) by the
/// gateway. The signature covers every field, so any mutation invalidates
/// the token.
///
/// # Fields
///
/// - `sub`: username (subject)
/// - `roles`: granted authorities, in the order the user store lists them
/// - `iat`: issued-at (Unix timestamp, seconds)
/// - `exp`: expiration (Unix timestamp, seconds)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Username (subject claim)
    pub sub: String,
    /// Authorities granted to the user, e.g. `["ROLE_USER", "ROLE_ADMIN"]`
    pub roles: Vec<String>,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: i64,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build a claim set expiring `expiry_secs` after `issued_at`.
    ///
    /// This is the only constructor, so `exp == iat + expiry_secs` holds
    /// for every token the issuer mints.
    pub fn new(
        subject: &str,
        roles: Vec<String>,
        issued_at: DateTime<Utc>,
        expiry_secs: i64,
    ) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: subject.to_string(),
            roles,
            iat,
            exp: iat + expiry_secs,
        }
    }

    /// Whether the claim set is expired at `now`. A token is valid strictly
    /// before its expiration instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
