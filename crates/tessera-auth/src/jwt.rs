//! RS256 token minting and verification.
//!
//! Minting uses the private key and only happens inside the identity
//! issuer. Verification uses the public key and only happens at the
//! gateway. Both are synchronous CPU-bound operations; the services run
//! them on the blocking pool so the scheduler never stalls.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};

use tessera_core::AuthError;

use crate::claims::Claims;
use crate::keys::{SigningKey, VerificationKey};

/// Sign a claim set into a compact RS256 token.
pub fn sign(claims: &Claims, key: &SigningKey) -> Result<String, AuthError> {
    encode(&Header::new(Algorithm::RS256), claims, &key.0)
        .map_err(|e| AuthError::Key(format!("failed to sign token: {e}")))
}

/// Mint an access token for `subject` carrying `roles`, issued now and
/// expiring `expiry_secs` later.
pub fn create_access_token(
    subject: &str,
    roles: Vec<String>,
    key: &SigningKey,
    expiry_secs: i64,
) -> Result<String, AuthError> {
    let claims = Claims::new(subject, roles, Utc::now(), expiry_secs);
    sign(&claims, key)
}

fn rs256_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::RS256);
    // expiry is enforced to the second; the default 60s leeway would let
    // freshly-expired tokens through
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);
    validation
}

/// Verify a compact token against the public key and return its claims.
///
/// Fails closed: any failure maps onto the token taxonomy and the caller
/// must not forward the request.
pub fn verify_token(token: &str, key: &VerificationKey) -> Result<Claims, AuthError> {
    decode::<Claims>(token, &key.0, &rs256_validation())
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::Crypto(_) => AuthError::TokenSignatureInvalid,
            _ => AuthError::TokenMalformed,
        })
}

/// Whether `token` verifies, is unexpired, and names `subject`.
pub fn validate_token(token: &str, subject: &str, key: &VerificationKey) -> bool {
    verify_token(token, key)
        .map(|claims| claims.sub == subject)
        .unwrap_or(false)
}
