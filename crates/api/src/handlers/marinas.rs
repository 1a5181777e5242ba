//! Handlers for the marina search/listing and detail surface.
//!
//! Listing is date-filter opt-in: without a `check_in`/`check_out` pair
//! every active marina is returned (paginated). With a pair, each candidate
//! marina's snapshot is fetched and availability qualification is applied
//! **before** pagination, so result pages never contain unbookable marinas.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use moorage_core::error::CoreError;
use moorage_core::search::qualifies;
use moorage_core::types::DbId;
use moorage_db::models::marina::Marina;
use moorage_db::repositories::{clamp_limit, clamp_offset, MarinaRepo, SnapshotRepo};

use crate::error::AppResult;
use crate::query::{PaginationParams, StayParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/marinas
///
/// List active marinas, optionally filtered to those with at least one slip
/// available for the supplied stay.
pub async fn search_marinas(
    State(state): State<AppState>,
    Query(stay): Query<StayParams>,
    Query(page): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let stay = stay.resolve()?;

    let limit = clamp_limit(page.limit);
    let offset = clamp_offset(page.offset);

    let marinas = match stay {
        None => MarinaRepo::list_active(&state.pool, limit, offset).await?,
        Some((check_in, check_out)) => {
            let candidates = MarinaRepo::list_active_all(&state.pool).await?;
            let candidate_count = candidates.len();

            let mut qualified: Vec<Marina> = Vec::new();
            for marina in candidates {
                let snapshot =
                    SnapshotRepo::fetch(&state.pool, marina.id, check_in, check_out).await?;
                if qualifies(&snapshot, check_in, check_out) {
                    qualified.push(marina);
                }
            }

            tracing::info!(
                %check_in,
                %check_out,
                candidate_count,
                qualified_count = qualified.len(),
                "Date-filtered marina search",
            );

            qualified
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect()
        }
    };

    Ok(Json(DataResponse { data: marinas }))
}

/// GET /api/v1/marinas/{id}
///
/// Marina detail. 404 when the marina is absent or inactive.
pub async fn get_marina(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let marina = MarinaRepo::get_active(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Marina",
            id,
        })?;

    Ok(Json(DataResponse { data: marina }))
}
