use axum::{Router, routing::get};

use super::controller::{get_region, list_regions};
use crate::state::AppState;

pub fn init_regions_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_regions))
        .route("/{id}", get(get_region))
}
