use axum::{Router, routing::get};

use super::controller::current_user;
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/me", get(current_user))
}
