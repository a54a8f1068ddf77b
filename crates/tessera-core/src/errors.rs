//! Application error types with HTTP response conversion.
//!
//! Two layers live here:
//!
//! - [`AuthError`]: the typed taxonomy of every authentication and
//!   authorization failure in the system. Services match on these variants
//!   to decide behavior; clients only ever see the message and status.
//! - [`AppError`]: the catch-all handler error, a status code plus an
//!   [`anyhow::Error`], rendered as `{"error": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Every way authentication or authorization can fail, across all services.
///
/// The issuer produces `CredentialsInvalid`; the gateway produces the
/// `Token*` variants; the interior route policy produces `Unauthenticated`
/// and `RoleInsufficient`. `Key` is a startup-only condition: a process that
/// cannot load its key material must not serve.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Uniform credential failure. Deliberately does not distinguish an
    /// unknown user from a wrong password.
    #[error("Invalid username or password")]
    CredentialsInvalid,

    /// No `Authorization` header on a protected route.
    #[error("Missing authorization header")]
    TokenMissing,

    /// Wrong scheme, empty token, or a token the parser cannot read.
    #[error("Invalid authorization header or malformed token")]
    TokenMalformed,

    /// Signature did not verify against the public key.
    #[error("Token signature verification failed")]
    TokenSignatureInvalid,

    /// Signature verified but the token is past its expiry.
    #[error("Token has expired")]
    TokenExpired,

    /// Authenticated principal lacks the authority the route requires.
    #[error("Access denied. Missing required authority: {0}")]
    RoleInsufficient(String),

    /// Protected route reached with no authenticated principal.
    #[error("Authentication required")]
    Unauthenticated,

    /// Key material could not be loaded or used. Fatal at startup.
    #[error("Key material error: {0}")]
    Key(String),
}

impl AuthError {
    /// HTTP status this failure maps to at the boundary where it surfaces.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::RoleInsufficient(_) => StatusCode::FORBIDDEN,
            AuthError::Key(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Handler-level error: an HTTP status plus the underlying cause.
///
/// The cause is logged server-side; only its display string reaches the
/// client, as `{"error": "..."}`.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: anyhow::Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    pub fn bad_gateway<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::new(StatusCode::BAD_GATEWAY, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let status = err.status();
        Self::new(status, err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_status_mapping() {
        assert_eq!(
            AuthError::CredentialsInvalid.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::TokenMissing.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::TokenMalformed.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::TokenSignatureInvalid.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::TokenExpired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::RoleInsufficient("ROLE_ADMIN".to_string()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthError::Key("missing".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_credentials_message_is_uniform() {
        // The display string must not reveal which half of the credential failed.
        let message = AuthError::CredentialsInvalid.to_string();
        assert!(!message.to_lowercase().contains("unknown"));
        assert!(!message.to_lowercase().contains("not found"));
    }

    #[test]
    fn test_app_error_from_auth_error() {
        let err: AppError = AuthError::RoleInsufficient("ROLE_ADMIN".to_string()).into();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert!(err.error.to_string().contains("ROLE_ADMIN"));
    }

    #[test]
    fn test_app_error_constructors() {
        let err = AppError::not_found(anyhow::anyhow!("Region not found"));
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = AppError::bad_gateway(anyhow::anyhow!("upstream unreachable"));
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }
}
