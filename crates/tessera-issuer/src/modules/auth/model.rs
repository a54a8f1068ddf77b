use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Credentials presented to the authenticate endpoint. Ephemeral: held for
/// the duration of one request, never persisted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AuthRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Envelope returned by the authenticate endpoint. `token` is null on
/// failure; `message` is safe to show to the caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub message: String,
}

impl AuthResponse {
    pub fn success(token: String) -> Self {
        Self {
            token: Some(token),
            message: "Authentication successful".to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            token: None,
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Public view of a created account. The hash never leaves the store.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisteredUser {
    pub username: String,
    pub roles: Vec<String>,
}
