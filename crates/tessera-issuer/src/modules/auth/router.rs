use axum::{Router, routing::post};

use super::controller::{authenticate, register};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/authenticate", post(authenticate))
        .route("/register", post(register))
}
