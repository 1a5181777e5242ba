//! Search qualification: whether a marina belongs in date-filtered listings.

use chrono::NaiveDate;

use crate::engine::{available_slips, AvailabilitySnapshot};
use crate::slip::BoatDimensions;

/// Whether the marina has at least one slip available for the stay,
/// irrespective of boat dimensions.
///
/// Date filtering is opt-in: callers only invoke this when the searcher
/// supplied a range. Without a range every active marina qualifies and this
/// function is not consulted.
pub fn qualifies(
    snapshot: &AvailabilitySnapshot,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> bool {
    !available_slips(snapshot, check_in, check_out, &BoatDimensions::unconstrained()).is_empty()
}
