//! Route tree for the API server.

pub mod health;
pub mod marinas;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /marinas                              search/listing (?check_in&check_out&limit&offset)
/// /marinas/{id}                         marina detail
/// /marinas/{id}/slips/available         checkout slip search (?check_in&check_out&boat_*)
/// /marinas/{id}/calendar                daily availability feed (?start&end)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/marinas", marinas::router())
}
