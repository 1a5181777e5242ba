//! Assembles the engine's read-only [`AvailabilitySnapshot`] for one marina.
//!
//! The snapshot is a point-in-time read scoped to a date window: all slips
//! of the marina (the engine applies the `is_available` switch itself),
//! constraining bookings that intersect the window, and blocked dates
//! inside the window. The window comparison uses the same closed-interval
//! form as the engine (`check_in_date <= end AND check_out_date >= start`)
//! so nothing the engine would count as a conflict is filtered out here.

use chrono::NaiveDate;
use moorage_core::engine::AvailabilitySnapshot;
use moorage_core::types::DbId;
use sqlx::PgPool;

use crate::models::blocked_date::BlockedDateRow;
use crate::models::booking::BookingRow;
use crate::models::slip::SlipRow;

/// Column list for `slips` queries.
const SLIP_COLUMNS: &str = "\
    id, marina_id, slip_number, length_meters, width_meters, \
    depth_meters, price_per_day, is_available";

/// Column list for `bookings` queries.
const BOOKING_COLUMNS: &str = "\
    id, slip_id, marina_id, check_in_date, check_out_date, status";

/// Column list for `blocked_dates` queries.
const BLOCKED_COLUMNS: &str = "\
    id, marina_id, slip_id, blocked_date, reason, \
    is_all_day, start_time, end_time";

/// Provides snapshot assembly for the availability engine.
pub struct SnapshotRepo;

impl SnapshotRepo {
    /// Fetch a marina's availability snapshot for `[window_start, window_end]`.
    ///
    /// Bookings are pre-filtered to the two constraining statuses; rows
    /// whose status fails to parse anyway are dropped with a warning, since
    /// an unknown status never constrains availability.
    pub async fn fetch(
        pool: &PgPool,
        marina_id: DbId,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> Result<AvailabilitySnapshot, sqlx::Error> {
        let slip_query = format!("SELECT {SLIP_COLUMNS} FROM slips WHERE marina_id = $1");
        let slips: Vec<SlipRow> = sqlx::query_as(&slip_query)
            .bind(marina_id)
            .fetch_all(pool)
            .await?;

        let booking_query = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings \
             WHERE marina_id = $1 \
               AND status IN ('pending', 'confirmed') \
               AND check_in_date <= $3 \
               AND check_out_date >= $2"
        );
        let bookings: Vec<BookingRow> = sqlx::query_as(&booking_query)
            .bind(marina_id)
            .bind(window_start)
            .bind(window_end)
            .fetch_all(pool)
            .await?;

        let blocked_query = format!(
            "SELECT {BLOCKED_COLUMNS} FROM blocked_dates \
             WHERE marina_id = $1 \
               AND blocked_date BETWEEN $2 AND $3"
        );
        let blocked_dates: Vec<BlockedDateRow> = sqlx::query_as(&blocked_query)
            .bind(marina_id)
            .bind(window_start)
            .bind(window_end)
            .fetch_all(pool)
            .await?;

        let bookings = bookings
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                let status = row.status.clone();
                let booking = row.into_booking();
                if booking.is_none() {
                    tracing::warn!(booking_id = id, %status, "Dropping booking with unknown status");
                }
                booking
            })
            .collect();

        Ok(AvailabilitySnapshot {
            slips: slips.into_iter().map(Into::into).collect(),
            bookings,
            blocked_dates: blocked_dates.into_iter().map(Into::into).collect(),
        })
    }
}
