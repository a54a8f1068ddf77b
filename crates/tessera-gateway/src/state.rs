use tessera_auth::VerificationKey;
use tessera_config::{AllowlistConfig, CorsConfig, JwtConfig, UpstreamConfig};

#[derive(Clone)]
pub struct AppState {
    pub verification_key: VerificationKey,
    pub allowlist: AllowlistConfig,
    pub upstreams: UpstreamConfig,
    pub cors_config: CorsConfig,
    pub http: reqwest::Client,
}

/// Build the gateway's state. Fails if the public key cannot be loaded;
/// a gateway that cannot verify must not forward anything.
pub fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env();
    let verification_key = VerificationKey::from_pem_file(&jwt_config.public_key_path)?;

    Ok(AppState {
        verification_key,
        allowlist: AllowlistConfig::from_env(),
        upstreams: UpstreamConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        http: reqwest::Client::new(),
    })
}
