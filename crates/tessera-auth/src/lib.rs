//! # Tessera Auth
//!
//! Authentication types and token utilities shared across the Tessera
//! services.
//!
//! This crate provides:
//!
//! - [`claims`]: the claim set carried inside a signed token
//! - [`keys`]: RSA key-pair halves for signing and verification
//! - [`jwt`]: RS256 token minting and verification
//! - [`principal`]: the per-request authenticated identity
//! - [`headers`]: the trust headers the gateway writes and interior
//!   services read
//!
//! # Trust model
//!
//! The identity issuer holds the private half of the key pair and is the
//! only component that can mint tokens. Every gateway instance holds the
//! public half and verifies tokens at the system boundary. Interior
//! services never see a token: they trust the `X-Authenticated-*` headers
//! the gateway sets on the forwarded request.
//!
//! # Example
//!
//! ```ignore
//! use tessera_auth::{SigningKey, VerificationKey, jwt};
//!
//! let signing_key = SigningKey::from_pem_file("keys/jwt-private.pem")?;
//! let token = jwt::create_access_token(
//!     "alice",
//!     vec!["ROLE_USER".to_string()],
//!     &signing_key,
//!     3600,
//! )?;
//!
//! let verification_key = VerificationKey::from_pem_file("keys/jwt-public.pem")?;
//! let claims = jwt::verify_token(&token, &verification_key)?;
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod claims;
pub mod headers;
pub mod jwt;
pub mod keys;
pub mod principal;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use keys::{SigningKey, VerificationKey};
pub use principal::AuthenticatedPrincipal;
