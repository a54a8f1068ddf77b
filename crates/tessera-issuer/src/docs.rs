use axum::Json;
use utoipa::OpenApi;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthRequest, AuthResponse, RegisterRequest, RegisteredUser};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::authenticate,
        crate::modules::auth::controller::register,
    ),
    components(schemas(
        AuthRequest,
        AuthResponse,
        RegisterRequest,
        RegisteredUser,
        ErrorResponse,
    )),
    tags(
        (name = "Authentication", description = "Credential authentication and token issuance")
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
