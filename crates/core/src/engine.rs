//! The availability engine: per-slip verdicts for a stay and per-day
//! summaries for a calendar window.
//!
//! Both operations are pure computations over an [`AvailabilitySnapshot`]
//! assembled by the persistence layer for one marina. The engine only
//! advises — it holds no locks and gives no transactional guarantee against
//! a concurrent booking landing between snapshot-read and booking commit;
//! the booking writer must re-validate (or rely on a database constraint) at
//! commit time.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::blocked::{resolve_blocks, BlockedDate};
use crate::booking::{booked_count_on, conflicting_slip_ids, Booking};
use crate::interval::{days_inclusive, stay_nights};
use crate::slip::{fits, BoatDimensions, Slip};
use crate::types::DbId;

/// Point-in-time read of one marina's inventory, booking ledger, and block
/// ledger. Constructed per request by the data-access layer and discarded
/// after a single computation; never persisted or cached.
#[derive(Debug, Clone, Default)]
pub struct AvailabilitySnapshot {
    pub slips: Vec<Slip>,
    pub bookings: Vec<Booking>,
    pub blocked_dates: Vec<BlockedDate>,
}

/// Classification of a single calendar day for the calendar widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStatus {
    /// Total slips in the marina (including administratively disabled ones
    /// — the calendar badge is about physical inventory).
    pub total_slips: usize,
    /// Slips estimated free this day. An upper-bound approximation: a slip
    /// both booked and blocked the same day is counted twice on the
    /// unavailable side, so this can under-report (floored at zero).
    pub available_count: usize,
    /// No slip is available this day and something caused it (a marina-wide
    /// block, or bookings/blocks covering everything).
    pub fully_blocked: bool,
    /// Some but not all slips are unavailable this day.
    pub has_partial_blocking: bool,
    /// Reason of the marina-wide block, when that is what closed the day.
    pub reason: Option<String>,
}

/// Slips available for the stay `[check_in, check_out)`, filtered to the
/// boat's dimensions and sorted cheapest-first.
///
/// Rules, in order:
/// 1. Administratively disabled slips (`is_available = false`) are out.
/// 2. A marina-wide block on any night of the stay voids every slip —
///    the result is empty.
/// 3. A slip-scoped block on any night of the stay excludes that slip for
///    the entire stay.
/// 4. A pending/confirmed booking overlapping the stay (closed-interval:
///    checkout day occupied) excludes its slip.
/// 5. The remainder is filtered by [`fits`] and sorted ascending by
///    `(price_per_day, length_meters, id)` for deterministic output.
///
/// An empty result is a normal answer ("no slip available"), including for
/// zero-length or inverted ranges.
pub fn available_slips(
    snapshot: &AvailabilitySnapshot,
    check_in: NaiveDate,
    check_out: NaiveDate,
    boat: &BoatDimensions,
) -> Vec<Slip> {
    if check_out <= check_in {
        return Vec::new();
    }

    let mut blocked: HashSet<DbId> = HashSet::new();
    for night in stay_nights(check_in, check_out) {
        let resolution = resolve_blocks(&snapshot.blocked_dates, night);
        if resolution.marina_wide {
            return Vec::new();
        }
        blocked.extend(resolution.slip_ids);
    }

    let conflicting = conflicting_slip_ids(&snapshot.bookings, check_in, check_out);

    let mut result: Vec<Slip> = snapshot
        .slips
        .iter()
        .filter(|s| s.is_available)
        .filter(|s| !blocked.contains(&s.id))
        .filter(|s| !conflicting.contains(&s.id))
        .filter(|s| fits(s, boat))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        a.price_per_day
            .total_cmp(&b.price_per_day)
            .then(a.length_meters.total_cmp(&b.length_meters))
            .then(a.id.cmp(&b.id))
    });

    result
}

/// Per-day availability summary over the inclusive window
/// `[range_start, range_end]`, keyed by date.
///
/// Each day is classified independently; an inverted window yields an empty
/// map. Windows are expected to be bounded by the caller (~6 months).
pub fn daily_availability(
    snapshot: &AvailabilitySnapshot,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> BTreeMap<NaiveDate, DayStatus> {
    let total_slips = snapshot.slips.len();
    let mut days = BTreeMap::new();

    for day in days_inclusive(range_start, range_end) {
        let resolution = resolve_blocks(&snapshot.blocked_dates, day);

        let status = if resolution.marina_wide {
            DayStatus {
                total_slips,
                available_count: 0,
                fully_blocked: true,
                has_partial_blocking: false,
                reason: resolution.reason,
            }
        } else {
            // Booked and blocked counts are summed without deduplicating a
            // slip that is both; the badge may under-report but never
            // over-reports availability.
            let unavailable = booked_count_on(&snapshot.bookings, day) + resolution.slip_ids.len();
            let available = total_slips.saturating_sub(unavailable);
            DayStatus {
                total_slips,
                available_count: available,
                fully_blocked: available == 0 && unavailable > 0,
                has_partial_blocking: unavailable > 0 && available > 0,
                reason: None,
            }
        };

        days.insert(day, status);
    }

    days
}
