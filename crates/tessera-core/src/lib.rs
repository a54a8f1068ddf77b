//! # Tessera Core
//!
//! Core types, errors, and utilities shared by every Tessera service.
//!
//! This crate provides:
//!
//! - [`errors`]: the authentication failure taxonomy ([`AuthError`]) and the
//!   HTTP-facing application error type ([`AppError`])
//! - [`password`]: bcrypt password hashing and verification
//! - [`logging`]: tracing initialization and the request-logging middleware
//!
//! # Example
//!
//! ```ignore
//! use tessera_core::{AppError, AuthError, hash_password, verify_password};
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//!
//! let err: AppError = AuthError::TokenExpired.into();
//! assert_eq!(err.status, axum::http::StatusCode::UNAUTHORIZED);
//! ```

pub mod errors;
pub mod logging;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, AuthError};
pub use logging::{init_tracing, logging_middleware};
pub use password::{hash_password, verify_password};
