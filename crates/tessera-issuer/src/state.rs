use std::sync::Arc;

use tessera_auth::SigningKey;
use tessera_config::JwtConfig;
use tracing::info;

use crate::store::{InMemoryUserStore, UserRecord, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub signing_key: SigningKey,
    pub jwt_config: JwtConfig,
}

/// Build the issuer's state. Fails if the private key cannot be loaded;
/// the process must refuse to serve rather than mint nothing.
pub fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env();
    let signing_key = SigningKey::from_pem_file(&jwt_config.private_key_path)?;

    let users = InMemoryUserStore::new();
    seed_admin_from_env(&users)?;

    Ok(AppState {
        users: Arc::new(users),
        signing_key,
        jwt_config,
    })
}

/// Optionally seed an administrator account from the environment, so a
/// fresh deployment has a way in before anyone registers.
fn seed_admin_from_env(users: &InMemoryUserStore) -> anyhow::Result<()> {
    let (Ok(username), Ok(password)) = (
        std::env::var("SEED_ADMIN_USERNAME"),
        std::env::var("SEED_ADMIN_PASSWORD"),
    ) else {
        return Ok(());
    };

    let password_hash = tessera_core::hash_password(&password).map_err(|e| e.error)?;
    users.insert(UserRecord {
        username: username.clone(),
        password_hash,
        roles: vec!["ROLE_ADMIN".to_string(), "ROLE_USER".to_string()],
    });
    info!(username = %username, "Seeded administrator account");

    Ok(())
}
