use dotenvy::dotenv;
use tracing::info;

use tessera_issuer::router::init_router;
use tessera_issuer::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tessera_core::init_tracing("tessera_issuer");

    // A missing or unreadable private key is fatal: an issuer that cannot
    // sign must not come up at all.
    let state = init_app_state().expect("issuer cannot start without its signing key");
    let app = init_router(state);

    let addr = std::env::var("ISSUER_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind issuer address");
    info!("Identity issuer listening on {addr}");
    axum::serve(listener, app).await.expect("server error");
}
