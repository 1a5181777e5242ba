//! Repository for the `marinas` table.

use moorage_core::types::DbId;
use sqlx::PgPool;

use crate::models::marina::Marina;

/// Column list for `marinas` queries.
const COLUMNS: &str = "\
    id, name, city, description, is_active, \
    created_at, updated_at";

/// Provides read access to the marina catalog.
pub struct MarinaRepo;

impl MarinaRepo {
    /// List active marinas ordered by name.
    ///
    /// Pagination is applied here only for the no-date-filter listing path;
    /// date-qualified search paginates after qualification, so it calls
    /// [`MarinaRepo::list_active_all`] instead.
    pub async fn list_active(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Marina>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM marinas \
             WHERE is_active = TRUE \
             ORDER BY name, id \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Marina>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List every active marina, ordered by name.
    pub async fn list_active_all(pool: &PgPool) -> Result<Vec<Marina>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM marinas \
             WHERE is_active = TRUE \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Marina>(&query).fetch_all(pool).await
    }

    /// Get an active marina by id. Returns `None` when absent or inactive.
    pub async fn get_active(pool: &PgPool, id: DbId) -> Result<Option<Marina>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM marinas \
             WHERE id = $1 AND is_active = TRUE"
        );
        sqlx::query_as::<_, Marina>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
