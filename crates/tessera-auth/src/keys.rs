//! RSA key-pair halves for token signing and verification.
//!
//! The two halves are separate types because they live in separate
//! processes: [`SigningKey`] only ever exists inside the identity issuer,
//! [`VerificationKey`] is distributed to every gateway instance. Both are
//! immutable for the process lifetime and safe to share across request
//! handlers without synchronization.

use std::fmt;
use std::path::Path;

use jsonwebtoken::{DecodingKey, EncodingKey};

use tessera_core::AuthError;

/// Private half of the RSA key pair. Held only by the identity issuer.
#[derive(Clone)]
pub struct SigningKey(pub(crate) EncodingKey);

impl SigningKey {
    /// Parse an RSA private key from PEM bytes (PKCS#1 or PKCS#8).
    pub fn from_rsa_pem(pem: &[u8]) -> Result<Self, AuthError> {
        EncodingKey::from_rsa_pem(pem)
            .map(Self)
            .map_err(|e| AuthError::Key(format!("invalid RSA private key: {e}")))
    }

    /// Load the private key from a PEM file. A failure here must abort
    /// startup: an issuer without its key cannot serve.
    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref();
        let pem = std::fs::read(path).map_err(|e| {
            AuthError::Key(format!("cannot read private key {}: {e}", path.display()))
        })?;
        Self::from_rsa_pem(&pem)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

/// Public half of the RSA key pair. Distributed to every gateway instance.
#[derive(Clone)]
pub struct VerificationKey(pub(crate) DecodingKey);

impl VerificationKey {
    /// Parse an RSA public key from SPKI PEM bytes.
    pub fn from_rsa_pem(pem: &[u8]) -> Result<Self, AuthError> {
        DecodingKey::from_rsa_pem(pem)
            .map(Self)
            .map_err(|e| AuthError::Key(format!("invalid RSA public key: {e}")))
    }

    /// Load the public key from a PEM file. A failure here must abort
    /// startup rather than degrade to unauthenticated passthrough.
    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref();
        let pem = std::fs::read(path).map_err(|e| {
            AuthError::Key(format!("cannot read public key {}: {e}", path.display()))
        })?;
        Self::from_rsa_pem(&pem)
    }
}

impl fmt::Debug for VerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationKey").finish_non_exhaustive()
    }
}
