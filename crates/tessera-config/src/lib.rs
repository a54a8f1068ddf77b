//! # Tessera Config
//!
//! Configuration types for the Tessera services.
//!
//! This crate provides configuration structures loaded from environment
//! variables, one per concern:
//!
//! - [`jwt`]: key material paths and token lifetime
//! - [`allowlist`]: public path prefixes exempt from authentication
//! - [`upstream`]: gateway routing to interior services
//! - [`cors`]: CORS configuration for the gateway edge
//!
//! # Example
//!
//! ```ignore
//! use tessera_config::{AllowlistConfig, CorsConfig, JwtConfig, UpstreamConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let allowlist = AllowlistConfig::from_env();
//! let upstreams = UpstreamConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod allowlist;
pub mod cors;
pub mod jwt;
pub mod upstream;

// Re-export commonly used types at crate root
pub use allowlist::AllowlistConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use upstream::UpstreamConfig;
