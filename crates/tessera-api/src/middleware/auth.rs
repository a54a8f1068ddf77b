//! The trust-header consumer: establishes the request's security context
//! from the headers the gateway wrote.
//!
//! No signature verification happens here. The deployment contract is that
//! only the gateway can reach this port, so a present header pair is a
//! verified identity by construction. Requests without the headers proceed
//! anonymously; the route policy decides later whether that is a failure.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use tessera_auth::AuthenticatedPrincipal;
use tessera_auth::headers::{X_AUTHENTICATED_ROLES, X_AUTHENTICATED_USER, principal_from_headers};
use tessera_core::{AppError, AuthError};

use crate::state::AppState;

/// Read the gateway trust headers and install the request-scoped principal.
pub async fn trust_context(mut req: Request, next: Next) -> Response {
    let username = req
        .headers()
        .get(X_AUTHENTICATED_USER)
        .and_then(|value| value.to_str().ok());
    let roles = req
        .headers()
        .get(X_AUTHENTICATED_ROLES)
        .and_then(|value| value.to_str().ok());

    if let (Some(username), Some(roles)) = (username, roles) {
        let principal = principal_from_headers(username, roles);
        debug!(user = %principal.username, "authenticated from gateway headers");
        req.extensions_mut().insert(principal);
    } else {
        debug!("no gateway identity headers; continuing anonymous");
    }

    next.run(req).await
}

/// Evaluate the route table against the installed principal.
pub async fn enforce_policy(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let principal = req.extensions().get::<AuthenticatedPrincipal>();
    state.policy.check(req.uri().path(), principal)?;
    Ok(next.run(req).await)
}

/// Extractor handing handlers the authenticated principal.
///
/// Rejects with 401 when the request reached the handler anonymously,
/// which only happens on routes the policy leaves open.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedPrincipal);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedPrincipal>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AuthError::Unauthenticated.into())
    }
}
