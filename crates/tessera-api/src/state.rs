use std::sync::Arc;

use crate::policy::RoutePolicy;

#[derive(Clone)]
pub struct AppState {
    pub policy: Arc<RoutePolicy>,
}

pub fn init_app_state() -> AppState {
    AppState {
        policy: Arc::new(RoutePolicy::standard()),
    }
}
