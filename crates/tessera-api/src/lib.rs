//! # Tessera API
//!
//! The interior ticket service. It sits behind the gateway and never sees
//! a token: identity arrives as the two trust headers the gateway writes,
//! and this service turns them into a request-scoped principal without any
//! cryptographic re-check.
//!
//! ## Request chain
//!
//! ```text
//! gateway → trust_context (headers → principal, or anonymous)
//!         → enforce_policy (route table: public / authenticated / authority)
//!         → handler
//! ```
//!
//! Missing headers are not an error by themselves; they only become one
//! when the route table requires an identity. The policy rejects with 401
//! when no principal is present and 403 when the principal lacks the
//! required authority.
//!
//! Correctness of the header trust rests on a deployment guarantee: only
//! the gateway can reach this service's port. The forwarded headers are
//! not signed hop-to-hop; see `DESIGN.md` for the flagged gap.
//!
//! ## Structure
//!
//! ```text
//! src/
//! ├── middleware/auth.rs   # trust-header consumer + CurrentUser extractor
//! ├── policy.rs            # explicit route table, built at startup
//! ├── modules/             # interior resources (interface-level)
//! ├── state.rs             # shared application state
//! ├── router.rs            # top-level router
//! └── docs.rs              # OpenAPI document
//! ```

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod policy;
pub mod router;
pub mod state;
