use axum::{Json, Router, middleware, routing::get};
use serde_json::json;

use tessera_core::logging_middleware;

use crate::docs::serve_openapi;
use crate::middleware::auth::{enforce_policy, trust_context};
use crate::modules::regions::init_regions_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(serve_openapi))
        .nest("/api/v1/regions", init_regions_router())
        .nest("/api/v1/users", init_users_router())
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state.clone(), enforce_policy))
        .layer(middleware::from_fn(trust_context))
        .layer(middleware::from_fn(logging_middleware))
}
