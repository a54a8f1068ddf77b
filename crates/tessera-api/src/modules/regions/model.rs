use serde::Serialize;
use utoipa::ToSchema;

/// A geographic region tickets are logged against.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Region {
    pub id: u32,
    pub code: String,
    pub name: String,
}
