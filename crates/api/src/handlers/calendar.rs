//! Handler for the marina-detail calendar feed.
//!
//! Returns a per-day availability summary over an inclusive date window,
//! consumed by the calendar widget to disable fully-blocked days and render
//! the per-day "N slips available" badge.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use moorage_core::engine::daily_availability;
use moorage_core::error::CoreError;
use moorage_core::types::DbId;
use moorage_db::repositories::{MarinaRepo, SnapshotRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Longest calendar window served in one request (~6 months).
pub const MAX_CALENDAR_DAYS: i64 = 185;

/// Query parameters for `GET /marinas/{id}/calendar`.
#[derive(Debug, Deserialize)]
pub struct CalendarParams {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// GET /api/v1/marinas/{id}/calendar
///
/// Daily availability over `[start, end]` inclusive, capped at
/// [`MAX_CALENDAR_DAYS`].
pub async fn get_calendar(
    State(state): State<AppState>,
    Path(marina_id): Path<DbId>,
    Query(params): Query<CalendarParams>,
) -> AppResult<impl IntoResponse> {
    validate_window(params.start, params.end)?;

    MarinaRepo::get_active(&state.pool, marina_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Marina",
            id: marina_id,
        })?;

    let snapshot = SnapshotRepo::fetch(&state.pool, marina_id, params.start, params.end).await?;
    let days = daily_availability(&snapshot, params.start, params.end);

    tracing::info!(
        marina_id,
        start = %params.start,
        end = %params.end,
        day_count = days.len(),
        "Calendar availability computed",
    );

    Ok(Json(DataResponse { data: days }))
}

/// Reject inverted or over-long windows before touching the database.
fn validate_window(start: NaiveDate, end: NaiveDate) -> Result<(), CoreError> {
    if end < start {
        return Err(CoreError::Validation(
            "end must not precede start".to_string(),
        ));
    }
    let day_count = (end - start).num_days() + 1;
    if day_count > MAX_CALENDAR_DAYS {
        return Err(CoreError::Validation(format!(
            "Calendar window must not exceed {MAX_CALENDAR_DAYS} days (got {day_count})"
        )));
    }
    Ok(())
}
