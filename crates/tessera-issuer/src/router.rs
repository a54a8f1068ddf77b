use axum::{Router, middleware, routing::get};

use tessera_core::logging_middleware;

use crate::docs::serve_openapi;
use crate::modules::auth::init_auth_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/api-docs/openapi.json", get(serve_openapi))
        .nest("/api/v1/auth", init_auth_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
}
