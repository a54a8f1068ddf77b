//! # Tessera Gateway
//!
//! The edge of the platform and its trust boundary. Every inbound request
//! passes the verifier middleware exactly once:
//!
//! 1. Allowlisted paths are forwarded unchanged.
//! 2. Everything else must carry `Authorization: Bearer <token>`.
//! 3. The token's RS256 signature is checked against the public key, and
//!    its expiry is enforced to the second.
//! 4. On success the request is rewritten: `X-Authenticated-User` and
//!    `X-Authenticated-Roles` are overwritten with the verified identity.
//!    Client-supplied values of those names never survive the hop.
//! 5. The rewritten request is proxied to the owning interior service.
//!
//! Any failure short-circuits with 401 before the proxy handler runs, so
//! interior services only ever see fully-anonymous (allowlisted) or
//! fully-trusted requests.
//!
//! The gateway holds only the public half of the key pair; it can verify
//! every token and mint none. If the key cannot be loaded at startup the
//! process exits instead of degrading to unauthenticated passthrough.

pub mod middleware;
pub mod proxy;
pub mod router;
pub mod state;
