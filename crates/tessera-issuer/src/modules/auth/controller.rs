use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::{error, instrument};
use utoipa::ToSchema;

use tessera_core::{AppError, AuthError};

use super::model::{AuthRequest, AuthResponse, RegisterRequest, RegisteredUser};
use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Authenticate credentials and receive a signed access token
#[utoipa::path(
    post,
    path = "/api/v1/auth/authenticate",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Authentication successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = AuthResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = AuthResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn authenticate(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AuthRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    // Failures are rendered locally as the AuthResponse envelope so nothing
    // internal leaks past this handler.
    let principal =
        match AuthService::authenticate(state.users.as_ref(), &dto.username, &dto.password).await {
            Ok(principal) => principal,
            Err(AuthError::CredentialsInvalid) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    Json(AuthResponse::failure(
                        "Invalid credentials. Please check your username and password.",
                    )),
                );
            }
            Err(err) => {
                error!("authentication failed unexpectedly: {err}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(AuthResponse::failure(
                        "An unexpected error occurred. Please try again later.",
                    )),
                );
            }
        };

    match AuthService::issue_token(&principal, &state.signing_key, state.jwt_config.token_expiry)
        .await
    {
        Ok(token) => (StatusCode::OK, Json(AuthResponse::success(token))),
        Err(err) => {
            error!("token minting failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuthResponse::failure(
                    "An unexpected error occurred. Please try again later.",
                )),
            )
        }
    }
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisteredUser),
        (status = 400, description = "Bad request - validation error or username taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisteredUser>), AppError> {
    let user = AuthService::register(state.users.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
