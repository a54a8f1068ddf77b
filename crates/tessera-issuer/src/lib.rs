//! # Tessera Issuer
//!
//! The identity issuer: the only process holding the private half of the
//! signing key pair, and therefore the only component able to mint access
//! tokens.
//!
//! ## Endpoints
//!
//! - `POST /api/v1/auth/authenticate`: verify credentials against the user
//!   store and return a signed token
//! - `POST /api/v1/auth/register`: create an account with `ROLE_USER`
//! - `GET /api-docs/openapi.json`: OpenAPI document
//!
//! Both auth endpoints sit on the gateway's public-path allowlist; every
//! other route in the platform requires the token this service mints.
//!
//! ## Structure
//!
//! ```text
//! src/
//! ├── modules/auth/     # authenticate + register (controller/service/model/router)
//! ├── store.rs          # user store interface + in-memory implementation
//! ├── state.rs          # shared application state
//! ├── router.rs         # top-level router
//! ├── docs.rs           # OpenAPI document
//! └── validator.rs      # validated JSON extractor
//! ```
//!
//! ## Failure policy
//!
//! Credential failures are uniform: the response never distinguishes an
//! unknown username from a wrong password. If the private key cannot be
//! loaded at startup the process exits instead of serving.

pub mod docs;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod validator;
