//! Booking domain type and the booking conflict resolver.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::interval::{range_covers, ranges_overlap};
use crate::types::DbId;

/// Lifecycle status of a booking, stored as lowercase TEXT.
///
/// Only `pending` and `confirmed` bookings constrain availability;
/// `cancelled` and `completed` never do. `completed` is a derived state
/// (checkout date in the past) written by external tooling, never by this
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// The lowercase TEXT representation stored in the `bookings` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    /// Parse the TEXT column value. Returns `None` for unrecognized values
    /// so callers can decide whether to drop or reject the row.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            "completed" => Some(BookingStatus::Completed),
            _ => None,
        }
    }

    /// Whether a booking in this status occupies its slip.
    pub fn constrains_availability(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// A reservation of one slip for a contiguous date range.
///
/// The stay occupies `[check_in_date, check_out_date)`; `check_out_date` is
/// the departure day. Conflict checks nonetheless treat the checkout day as
/// occupied (closed-interval semantics, see [`crate::interval`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub slip_id: DbId,
    pub marina_id: DbId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
}

/// Ids of slips whose constraining bookings overlap `[check_in, check_out]`.
///
/// Cancelled and completed bookings are skipped. The candidate range is
/// evaluated against each booking's whole range in one pass; day-by-day
/// iteration is unnecessary because bookings are contiguous.
pub fn conflicting_slip_ids(
    bookings: &[Booking],
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> HashSet<DbId> {
    bookings
        .iter()
        .filter(|b| b.status.constrains_availability())
        .filter(|b| ranges_overlap(check_in, check_out, b.check_in_date, b.check_out_date))
        .map(|b| b.slip_id)
        .collect()
}

/// Count of constraining bookings that cover `date`. Feeds the daily
/// summary; a booking covers its checkout day (closed semantics).
pub fn booked_count_on(bookings: &[Booking], date: NaiveDate) -> usize {
    bookings
        .iter()
        .filter(|b| b.status.constrains_availability())
        .filter(|b| range_covers(b.check_in_date, b.check_out_date, date))
        .count()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn booking(slip_id: DbId, check_in: &str, check_out: &str, status: BookingStatus) -> Booking {
        Booking {
            id: slip_id * 100,
            slip_id,
            marina_id: 1,
            check_in_date: check_in.parse().unwrap(),
            check_out_date: check_out.parse().unwrap(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::booking;
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    // -----------------------------------------------------------------------
    // Status parsing
    // -----------------------------------------------------------------------

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_parses_to_none() {
        assert_eq!(BookingStatus::parse("refunded"), None);
        assert_eq!(BookingStatus::parse(""), None);
        assert_eq!(BookingStatus::parse("Pending"), None);
    }

    #[test]
    fn only_pending_and_confirmed_constrain() {
        assert!(BookingStatus::Pending.constrains_availability());
        assert!(BookingStatus::Confirmed.constrains_availability());
        assert!(!BookingStatus::Cancelled.constrains_availability());
        assert!(!BookingStatus::Completed.constrains_availability());
    }

    // -----------------------------------------------------------------------
    // Conflict resolution
    // -----------------------------------------------------------------------

    #[test]
    fn overlapping_confirmed_booking_conflicts() {
        let bookings = vec![booking(1, "2024-06-01", "2024-06-05", BookingStatus::Confirmed)];
        let conflicts = conflicting_slip_ids(&bookings, d("2024-06-03"), d("2024-06-06"));
        assert!(conflicts.contains(&1));
    }

    #[test]
    fn overlapping_pending_booking_conflicts() {
        let bookings = vec![booking(1, "2024-06-01", "2024-06-05", BookingStatus::Pending)];
        let conflicts = conflicting_slip_ids(&bookings, d("2024-06-03"), d("2024-06-06"));
        assert!(conflicts.contains(&1));
    }

    #[test]
    fn cancelled_and_completed_never_conflict() {
        let bookings = vec![
            booking(1, "2024-06-01", "2024-06-05", BookingStatus::Cancelled),
            booking(2, "2024-06-01", "2024-06-05", BookingStatus::Completed),
        ];
        let conflicts = conflicting_slip_ids(&bookings, d("2024-06-03"), d("2024-06-06"));
        assert!(conflicts.is_empty());
    }

    /// Closed-interval semantics: a booking checking out on the candidate's
    /// check-in day still conflicts. Same-day turnover is not permitted.
    #[test]
    fn checkout_day_checkin_conflicts() {
        let bookings = vec![booking(1, "2024-01-01", "2024-01-05", BookingStatus::Confirmed)];
        let conflicts = conflicting_slip_ids(&bookings, d("2024-01-05"), d("2024-01-08"));
        assert!(conflicts.contains(&1));
    }

    #[test]
    fn disjoint_booking_does_not_conflict() {
        let bookings = vec![booking(1, "2024-01-01", "2024-01-05", BookingStatus::Confirmed)];
        let conflicts = conflicting_slip_ids(&bookings, d("2024-01-06"), d("2024-01-08"));
        assert!(conflicts.is_empty());
    }

    #[test]
    fn multiple_slips_collect_distinct_ids() {
        let bookings = vec![
            booking(1, "2024-06-01", "2024-06-05", BookingStatus::Confirmed),
            booking(1, "2024-06-02", "2024-06-04", BookingStatus::Pending),
            booking(2, "2024-06-03", "2024-06-07", BookingStatus::Confirmed),
            booking(3, "2024-07-01", "2024-07-05", BookingStatus::Confirmed),
        ];
        let conflicts = conflicting_slip_ids(&bookings, d("2024-06-03"), d("2024-06-06"));
        assert_eq!(conflicts.len(), 2);
        assert!(conflicts.contains(&1));
        assert!(conflicts.contains(&2));
    }

    // -----------------------------------------------------------------------
    // Daily booked count
    // -----------------------------------------------------------------------

    #[test]
    fn booked_count_covers_checkout_day() {
        let bookings = vec![booking(1, "2024-06-01", "2024-06-05", BookingStatus::Confirmed)];
        assert_eq!(booked_count_on(&bookings, d("2024-06-01")), 1);
        assert_eq!(booked_count_on(&bookings, d("2024-06-05")), 1);
        assert_eq!(booked_count_on(&bookings, d("2024-06-06")), 0);
    }

    #[test]
    fn booked_count_skips_non_constraining() {
        let bookings = vec![
            booking(1, "2024-06-01", "2024-06-05", BookingStatus::Cancelled),
            booking(2, "2024-06-01", "2024-06-05", BookingStatus::Confirmed),
        ];
        assert_eq!(booked_count_on(&bookings, d("2024-06-03")), 1);
    }
}
