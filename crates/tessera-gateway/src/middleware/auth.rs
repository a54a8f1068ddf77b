//! The edge verifier: per-request token validation at the trust boundary.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use tessera_auth::headers::{X_AUTHENTICATED_ROLES, X_AUTHENTICATED_USER, join_roles};
use tessera_auth::{AuthenticatedPrincipal, jwt};
use tessera_core::{AppError, AuthError};

use crate::state::AppState;

/// Validate the bearer token and rewrite the request with the verified
/// identity before it is forwarded.
///
/// No request reaches the proxy handler unless it is allowlisted or every
/// check here passed; a failure short-circuits with 401 and the request is
/// never forwarded.
pub async fn verify_request(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Public paths pass through untouched: no token required, no headers added.
    if state.allowlist.is_public(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::TokenMissing)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::TokenMalformed)?;
    if token.is_empty() {
        return Err(AuthError::TokenMalformed.into());
    }

    // RSA verification is CPU-bound and sits on the critical path of every
    // protected call; run it on the blocking pool so in-flight requests on
    // this worker are not stalled.
    let key = state.verification_key.clone();
    let token = token.to_string();
    let claims = tokio::task::spawn_blocking(move || jwt::verify_token(&token, &key))
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("verification task failed: {e}")))?
        .inspect_err(|err| warn!(path = %req.uri().path(), "token rejected: {err}"))?;

    let principal = AuthenticatedPrincipal::from_claims(&claims);
    debug!(user = %principal.username, "token verified, forwarding with trust headers");

    // A subject or role that cannot be a header value cannot cross the
    // boundary; reject rather than forward a half-written identity.
    let user_value =
        HeaderValue::from_str(&principal.username).map_err(|_| AuthError::TokenMalformed)?;
    let roles_value = HeaderValue::from_str(&join_roles(&principal.authorities))
        .map_err(|_| AuthError::TokenMalformed)?;

    // insert replaces every client-supplied value of the same name: the
    // trust headers are overwritten, never appended.
    let headers = req.headers_mut();
    headers.insert(X_AUTHENTICATED_USER, user_value);
    headers.insert(X_AUTHENTICATED_ROLES, roles_value);

    Ok(next.run(req).await)
}
