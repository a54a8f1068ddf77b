use axum::Json;
use axum::extract::Path;
use tracing::instrument;

use tessera_core::AppError;

use super::model::Region;
use super::service::RegionService;

/// List all regions
#[utoipa::path(
    get,
    path = "/api/v1/regions",
    responses(
        (status = 200, description = "All regions", body = [Region]),
        (status = 401, description = "Not authenticated")
    ),
    tag = "Regions"
)]
#[instrument]
pub async fn list_regions() -> Json<Vec<Region>> {
    Json(RegionService::list())
}

/// Get a region by id
#[utoipa::path(
    get,
    path = "/api/v1/regions/{id}",
    params(("id" = u32, Path, description = "Region id")),
    responses(
        (status = 200, description = "The region", body = Region),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Unknown region")
    ),
    tag = "Regions"
)]
#[instrument]
pub async fn get_region(Path(id): Path<u32>) -> Result<Json<Region>, AppError> {
    RegionService::find(id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Region {id} not found")))
}
