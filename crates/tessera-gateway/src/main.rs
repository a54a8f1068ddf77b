use dotenvy::dotenv;
use tracing::info;

use tessera_gateway::router::init_router;
use tessera_gateway::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tessera_core::init_tracing("tessera_gateway");

    // A missing or unreadable public key is fatal: the gateway must never
    // degrade to forwarding unverified requests.
    let state = init_app_state().expect("gateway cannot start without the verification key");
    let app = init_router(state);

    let addr = std::env::var("GATEWAY_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind gateway address");
    info!("Edge gateway listening on {addr}");
    axum::serve(listener, app).await.expect("server error");
}
