//! Request-path middleware for the gateway.
//!
//! - [`auth`]: the edge verifier: token validation and trust-header
//!   rewriting, executed once per inbound request

pub mod auth;
