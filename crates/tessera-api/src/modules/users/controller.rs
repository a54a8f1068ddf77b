use axum::Json;
use tracing::instrument;

use super::model::UserIdentity;
use crate::middleware::auth::CurrentUser;

/// Identity of the current request
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "The asserted identity", body = UserIdentity),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Missing ROLE_ADMIN")
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn current_user(CurrentUser(principal): CurrentUser) -> Json<UserIdentity> {
    Json(UserIdentity {
        username: principal.username,
        authorities: principal.authorities,
    })
}
