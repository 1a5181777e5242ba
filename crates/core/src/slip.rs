//! Slip and boat domain types plus the capacity filter.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A physical mooring location within a marina.
///
/// `is_available` is the host's administrative on/off switch. It is
/// independent of bookings and blocks: a switched-off slip never takes part
/// in availability computation at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slip {
    pub id: DbId,
    pub marina_id: DbId,
    /// Display label, e.g. "A-12".
    pub slip_number: String,
    pub length_meters: f64,
    pub width_meters: f64,
    /// Water depth at the slip. Unknown for some marinas.
    pub depth_meters: Option<f64>,
    pub price_per_day: f64,
    pub is_available: bool,
}

/// Boat dimensions used as slip filter criteria.
///
/// Width and draft are optional; a missing dimension never disqualifies a
/// slip (permissive default).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoatDimensions {
    pub length_meters: f64,
    pub width_meters: Option<f64>,
    pub draft_meters: Option<f64>,
}

impl BoatDimensions {
    /// A boat that fits every slip. Used by search qualification, where the
    /// question is "does any slip have a free date range" irrespective of
    /// any particular vessel.
    pub fn unconstrained() -> Self {
        Self {
            length_meters: 0.0,
            width_meters: None,
            draft_meters: None,
        }
    }
}

/// Whether `boat` physically fits `slip`.
///
/// Length is always checked. Width is checked only when the boat supplies
/// one. Draft is checked only when the boat supplies one AND the slip
/// declares a depth. All comparisons are exact `<=` in meters, no tolerance.
pub fn fits(slip: &Slip, boat: &BoatDimensions) -> bool {
    if boat.length_meters > slip.length_meters {
        return false;
    }
    if let Some(width) = boat.width_meters {
        if width > slip.width_meters {
            return false;
        }
    }
    if let (Some(draft), Some(depth)) = (boat.draft_meters, slip.depth_meters) {
        if draft > depth {
            return false;
        }
    }
    true
}


#[cfg(test)]
mod tests {
    use super::test_support::slip;
    use super::*;

    fn boat(length: f64, width: Option<f64>, draft: Option<f64>) -> BoatDimensions {
        BoatDimensions {
            length_meters: length,
            width_meters: width,
            draft_meters: draft,
        }
    }

    // -----------------------------------------------------------------------
    // Length
    // -----------------------------------------------------------------------

    #[test]
    fn boat_shorter_than_slip_fits() {
        assert!(fits(&slip(1), &boat(10.0, None, None)));
    }

    #[test]
    fn boat_exactly_slip_length_fits() {
        assert!(fits(&slip(1), &boat(12.0, None, None)));
    }

    #[test]
    fn boat_longer_than_slip_rejected() {
        assert!(!fits(&slip(1), &boat(12.5, None, None)));
    }

    // -----------------------------------------------------------------------
    // Width
    // -----------------------------------------------------------------------

    #[test]
    fn boat_wider_than_slip_rejected() {
        assert!(!fits(&slip(1), &boat(10.0, Some(4.5), None)));
    }

    #[test]
    fn missing_width_does_not_disqualify() {
        assert!(fits(&slip(1), &boat(10.0, None, None)));
    }

    // -----------------------------------------------------------------------
    // Draft vs depth
    // -----------------------------------------------------------------------

    #[test]
    fn boat_draft_deeper_than_slip_rejected() {
        assert!(!fits(&slip(1), &boat(10.0, None, Some(3.5))));
    }

    #[test]
    fn draft_ignored_when_slip_depth_unknown() {
        let mut s = slip(1);
        s.depth_meters = None;
        assert!(fits(&s, &boat(10.0, None, Some(9.0))));
    }

    #[test]
    fn missing_draft_does_not_disqualify() {
        let mut s = slip(1);
        s.depth_meters = Some(0.5);
        assert!(fits(&s, &boat(10.0, None, None)));
    }

    // -----------------------------------------------------------------------
    // Unconstrained boat
    // -----------------------------------------------------------------------

    #[test]
    fn unconstrained_boat_fits_everything() {
        let mut s = slip(1);
        s.length_meters = 0.0;
        s.width_meters = 0.0;
        s.depth_meters = Some(0.0);
        assert!(fits(&s, &BoatDimensions::unconstrained()));
    }
}
