//! Request-path middleware for the interior service.
//!
//! - [`auth`]: the trust-header consumer and the `CurrentUser` extractor

pub mod auth;
