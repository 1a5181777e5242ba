//! Blocked-date domain type and the blocked-date resolver.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::types::DbId;

/// An administrative unavailability record for one calendar date.
///
/// `slip_id = None` means the entire marina is blocked for that date,
/// overriding all per-slip reasoning. Partial-day records
/// (`is_all_day = false`) carry a time window, but availability is decided
/// at date granularity: the window is display metadata only and the record
/// blocks the whole date, exactly like an all-day record. A partial-day
/// record with missing times is likewise treated as all-day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockedDate {
    pub id: DbId,
    pub marina_id: DbId,
    /// `None` blocks every slip in the marina for `blocked_date`.
    pub slip_id: Option<DbId>,
    pub blocked_date: NaiveDate,
    pub reason: Option<String>,
    pub is_all_day: bool,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

/// The set of slips a date's block records render unavailable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockResolution {
    /// A marina-wide record exists for the date; every slip is blocked and
    /// `slip_ids` is irrelevant.
    pub marina_wide: bool,
    /// Reason of the first marina-wide record, surfaced to the calendar.
    pub reason: Option<String>,
    /// Distinct slip-scoped blocked ids (duplicates are idempotent).
    pub slip_ids: HashSet<DbId>,
}

/// Resolve which slips are blocked on `date`.
///
/// A marina-wide record short-circuits: the caller must treat every slip as
/// blocked that day regardless of bookings or per-slip state.
pub fn resolve_blocks(blocked_dates: &[BlockedDate], date: NaiveDate) -> BlockResolution {
    let mut resolution = BlockResolution::default();

    for record in blocked_dates.iter().filter(|b| b.blocked_date == date) {
        match record.slip_id {
            None => {
                resolution.marina_wide = true;
                resolution.reason = record.reason.clone();
                resolution.slip_ids.clear();
                return resolution;
            }
            Some(slip_id) => {
                resolution.slip_ids.insert(slip_id);
            }
        }
    }

    resolution
}
