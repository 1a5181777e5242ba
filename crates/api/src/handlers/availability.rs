//! Handler for the checkout slip search.
//!
//! Given a marina, a stay, and optional boat dimensions, returns the slips
//! the engine judges available, cheapest first. An empty list is a normal
//! 200 answer ("no slip available for your boat during these dates"); the
//! caller must not proceed toward payment on it. Results are advisory — a
//! concurrent booking can land after the snapshot read, so the booking
//! writer re-validates at commit time.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use moorage_core::engine::available_slips;
use moorage_core::error::CoreError;
use moorage_core::slip::BoatDimensions;
use moorage_core::types::DbId;
use moorage_db::repositories::{MarinaRepo, SnapshotRepo};

use crate::error::AppResult;
use crate::query::StayParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /marinas/{id}/slips/available`.
#[derive(Debug, Deserialize)]
pub struct SlipAvailabilityParams {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub boat_length: Option<f64>,
    pub boat_width: Option<f64>,
    pub boat_draft: Option<f64>,
}

impl SlipAvailabilityParams {
    /// Boat filter from the optional dimension parameters. No length means
    /// no dimension filtering at all.
    fn boat(&self) -> BoatDimensions {
        match self.boat_length {
            Some(length) => BoatDimensions {
                length_meters: length,
                width_meters: self.boat_width,
                draft_meters: self.boat_draft,
            },
            None => BoatDimensions::unconstrained(),
        }
    }
}

/// GET /api/v1/marinas/{id}/slips/available
///
/// Slip search at checkout. Dates are required and must be strictly
/// increasing; boat dimensions are optional.
pub async fn list_available_slips(
    State(state): State<AppState>,
    Path(marina_id): Path<DbId>,
    Query(params): Query<SlipAvailabilityParams>,
) -> AppResult<impl IntoResponse> {
    let (check_in, check_out) = StayParams {
        check_in: params.check_in,
        check_out: params.check_out,
    }
    .require()?;

    // Distinguish "unknown marina" (404) from "no slip available" (200, []).
    MarinaRepo::get_active(&state.pool, marina_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Marina",
            id: marina_id,
        })?;

    let snapshot = SnapshotRepo::fetch(&state.pool, marina_id, check_in, check_out).await?;
    let slips = available_slips(&snapshot, check_in, check_out, &params.boat());

    tracing::info!(
        marina_id,
        %check_in,
        %check_out,
        available_count = slips.len(),
        "Slip availability computed",
    );

    Ok(Json(DataResponse { data: slips }))
}
