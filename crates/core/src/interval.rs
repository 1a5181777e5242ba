//! Date-range overlap predicate and day iteration helpers.
//!
//! Every overlap decision in this crate goes through [`ranges_overlap`] so
//! that booking conflicts and blocked-date checks cannot drift apart.
//!
//! The predicate uses **closed-interval** semantics: a booking's checkout
//! day is itself considered occupied through end of day, so a stay checking
//! out on day D conflicts with a stay checking in on day D. Same-day
//! turnover is deliberately not permitted.

use chrono::NaiveDate;

/// Whether `[a_start, a_end]` and `[b_start, b_end]` share at least one day.
///
/// Closed-interval comparison: `a_start <= b_end && b_start <= a_end`.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && b_start <= a_end
}

/// Whether a range covers a single day. Used by the daily summary.
pub fn range_covers(start: NaiveDate, end: NaiveDate, day: NaiveDate) -> bool {
    ranges_overlap(day, day, start, end)
}

/// The nights of a stay: every day in `[check_in, check_out)`.
///
/// Empty when `check_out <= check_in` (zero-length or inverted stays
/// produce no nights rather than an error).
pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    check_in.iter_days().take_while(move |d| *d < check_out)
}

/// Every day in the inclusive window `[start, end]`.
///
/// Empty when `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    // -----------------------------------------------------------------------
    // ranges_overlap
    // -----------------------------------------------------------------------

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        assert!(!ranges_overlap(
            d("2024-06-01"),
            d("2024-06-03"),
            d("2024-06-05"),
            d("2024-06-08"),
        ));
    }

    #[test]
    fn nested_ranges_overlap() {
        assert!(ranges_overlap(
            d("2024-06-01"),
            d("2024-06-10"),
            d("2024-06-03"),
            d("2024-06-05"),
        ));
    }

    #[test]
    fn partial_ranges_overlap() {
        assert!(ranges_overlap(
            d("2024-06-01"),
            d("2024-06-05"),
            d("2024-06-03"),
            d("2024-06-08"),
        ));
    }

    /// Under closed-interval semantics the checkout day is occupied, so a
    /// stay ending Jan 5 conflicts with a stay starting Jan 5. This forbids
    /// same-day turnover and must hold in both the booking conflict resolver
    /// and any future slot scheduling.
    #[test]
    fn checkout_day_conflicts_with_same_day_checkin() {
        assert!(ranges_overlap(
            d("2024-01-05"),
            d("2024-01-08"),
            d("2024-01-01"),
            d("2024-01-05"),
        ));
    }

    #[test]
    fn adjacent_with_gap_does_not_overlap() {
        assert!(!ranges_overlap(
            d("2024-01-06"),
            d("2024-01-08"),
            d("2024-01-01"),
            d("2024-01-05"),
        ));
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (d("2024-06-01"), d("2024-06-05"), d("2024-06-03"), d("2024-06-08")),
            (d("2024-06-01"), d("2024-06-03"), d("2024-06-05"), d("2024-06-08")),
            (d("2024-06-01"), d("2024-06-10"), d("2024-06-04"), d("2024-06-04")),
        ];
        for (a1, a2, b1, b2) in cases {
            assert_eq!(
                ranges_overlap(a1, a2, b1, b2),
                ranges_overlap(b1, b2, a1, a2),
            );
        }
    }

    #[test]
    fn single_day_ranges_overlap_only_on_same_day() {
        let day = d("2024-06-04");
        assert!(ranges_overlap(day, day, day, day));
        assert!(!ranges_overlap(day, day, d("2024-06-05"), d("2024-06-05")));
    }

    // -----------------------------------------------------------------------
    // range_covers
    // -----------------------------------------------------------------------

    #[test]
    fn range_covers_endpoints_inclusive() {
        let start = d("2024-06-01");
        let end = d("2024-06-05");
        assert!(range_covers(start, end, start));
        assert!(range_covers(start, end, end));
        assert!(range_covers(start, end, d("2024-06-03")));
        assert!(!range_covers(start, end, d("2024-06-06")));
        assert!(!range_covers(start, end, d("2024-05-31")));
    }

    // -----------------------------------------------------------------------
    // Day iterators
    // -----------------------------------------------------------------------

    #[test]
    fn stay_nights_excludes_checkout_day() {
        let nights: Vec<_> = stay_nights(d("2024-06-03"), d("2024-06-06")).collect();
        assert_eq!(
            nights,
            vec![d("2024-06-03"), d("2024-06-04"), d("2024-06-05")]
        );
    }

    #[test]
    fn zero_length_stay_has_no_nights() {
        assert_eq!(stay_nights(d("2024-06-03"), d("2024-06-03")).count(), 0);
    }

    #[test]
    fn inverted_stay_has_no_nights() {
        assert_eq!(stay_nights(d("2024-06-06"), d("2024-06-03")).count(), 0);
    }

    #[test]
    fn days_inclusive_includes_both_endpoints() {
        let days: Vec<_> = days_inclusive(d("2024-06-29"), d("2024-07-01")).collect();
        assert_eq!(
            days,
            vec![d("2024-06-29"), d("2024-06-30"), d("2024-07-01")]
        );
    }

    #[test]
    fn days_inclusive_single_day() {
        let days: Vec<_> = days_inclusive(d("2024-06-29"), d("2024-06-29")).collect();
        assert_eq!(days, vec![d("2024-06-29")]);
    }

    #[test]
    fn days_inclusive_inverted_window_is_empty() {
        assert_eq!(days_inclusive(d("2024-07-01"), d("2024-06-29")).count(), 0);
    }
}
