use tracing::{instrument, warn};

use tessera_auth::{AuthenticatedPrincipal, SigningKey, jwt};
use tessera_core::{AppError, AuthError, hash_password, verify_password};

use super::model::{RegisterRequest, RegisteredUser};
use crate::store::{UserRecord, UserStore};

pub struct AuthService;

impl AuthService {
    /// Check credentials against the user store.
    ///
    /// Fails uniformly with `CredentialsInvalid`: the caller cannot tell an
    /// unknown username from a wrong password, and a stored hash that bcrypt
    /// refuses to parse also fails closed. The bcrypt comparison runs on the
    /// blocking pool.
    #[instrument(skip_all, fields(username = %username))]
    pub async fn authenticate(
        store: &dyn UserStore,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedPrincipal, AuthError> {
        let Some(record) = store.find_by_username(username) else {
            return Err(AuthError::CredentialsInvalid);
        };

        let password = password.to_string();
        let hash = record.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| {
                warn!("password verification task failed: {e}");
                AuthError::CredentialsInvalid
            })?
            .unwrap_or_else(|e| {
                warn!("stored password hash rejected: {}", e.error);
                false
            });

        if !matches {
            return Err(AuthError::CredentialsInvalid);
        }

        Ok(AuthenticatedPrincipal::new(record.username, record.roles))
    }

    /// Mint an access token for an authenticated principal. RSA signing is
    /// CPU-bound, so it also runs on the blocking pool.
    pub async fn issue_token(
        principal: &AuthenticatedPrincipal,
        signing_key: &SigningKey,
        expiry_secs: i64,
    ) -> Result<String, AuthError> {
        let subject = principal.username.clone();
        let roles = principal.authorities.clone();
        let key = signing_key.clone();

        tokio::task::spawn_blocking(move || {
            jwt::create_access_token(&subject, roles, &key, expiry_secs)
        })
        .await
        .map_err(|e| AuthError::Key(format!("token signing task failed: {e}")))?
    }

    /// Create an account with the default `ROLE_USER` authority.
    #[instrument(skip_all, fields(username = %dto.username))]
    pub async fn register(
        store: &dyn UserStore,
        dto: RegisterRequest,
    ) -> Result<RegisteredUser, AppError> {
        let password = dto.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!("password hashing task failed: {e}")))??;

        let roles = vec!["ROLE_USER".to_string()];
        let record = UserRecord {
            username: dto.username.clone(),
            password_hash,
            roles: roles.clone(),
        };

        if !store.insert(record) {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Username already exists"
            )));
        }

        Ok(RegisteredUser {
            username: dto.username,
            roles,
        })
    }
}
