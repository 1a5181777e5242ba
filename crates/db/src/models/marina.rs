use moorage_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `marinas` table. Served directly in listing and detail
/// responses; the engine never sees marinas, only their inventories.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Marina {
    pub id: DbId,
    pub name: String,
    pub city: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
