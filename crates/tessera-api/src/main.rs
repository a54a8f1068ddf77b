use dotenvy::dotenv;
use tracing::info;

use tessera_api::router::init_router;
use tessera_api::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tessera_core::init_tracing("tessera_api");

    let state = init_app_state();
    let app = init_router(state);

    let addr = std::env::var("API_ADDR").unwrap_or_else(|_| "0.0.0.0:8082".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind API address");
    info!("Ticket API listening on {addr}");
    axum::serve(listener, app).await.expect("server error");
}
