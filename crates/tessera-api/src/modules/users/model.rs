use serde::Serialize;
use utoipa::ToSchema;

/// The identity this service sees for the current request, exactly as the
/// gateway asserted it.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserIdentity {
    pub username: String,
    pub authorities: Vec<String>,
}
