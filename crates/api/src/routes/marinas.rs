//! Route definitions for the marina surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::{availability, calendar, marinas};
use crate::state::AppState;

/// Marina routes mounted at `/marinas`.
///
/// ```text
/// GET /                        -> search_marinas
/// GET /{id}                    -> get_marina
/// GET /{id}/slips/available    -> list_available_slips
/// GET /{id}/calendar           -> get_calendar
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(marinas::search_marinas))
        .route("/{id}", get(marinas::get_marina))
        .route(
            "/{id}/slips/available",
            get(availability::list_available_slips),
        )
        .route("/{id}/calendar", get(calendar::get_calendar))
}
