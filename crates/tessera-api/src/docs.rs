use axum::Json;
use utoipa::OpenApi;

use crate::modules::regions::model::Region;
use crate::modules::users::model::UserIdentity;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::regions::controller::list_regions,
        crate::modules::regions::controller::get_region,
        crate::modules::users::controller::current_user,
    ),
    components(schemas(Region, UserIdentity)),
    tags(
        (name = "Regions", description = "Region catalog"),
        (name = "Users", description = "Request identity")
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
