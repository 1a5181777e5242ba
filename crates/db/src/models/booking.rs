use chrono::NaiveDate;
use moorage_core::booking::{Booking, BookingStatus};
use moorage_core::types::DbId;
use sqlx::FromRow;

/// A row from the `bookings` table. Status is stored as lowercase TEXT and
/// parsed into [`BookingStatus`] during conversion.
#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub id: DbId,
    pub slip_id: DbId,
    pub marina_id: DbId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
}

impl BookingRow {
    /// Convert into the domain type. Returns `None` when the status string
    /// is unrecognized; such rows are dropped by the snapshot assembler (an
    /// unknown status never constrains availability).
    pub fn into_booking(self) -> Option<Booking> {
        let status = BookingStatus::parse(&self.status)?;
        Some(Booking {
            id: self.id,
            slip_id: self.slip_id,
            marina_id: self.marina_id,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> BookingRow {
        BookingRow {
            id: 1,
            slip_id: 2,
            marina_id: 3,
            check_in_date: "2024-06-01".parse().unwrap(),
            check_out_date: "2024-06-05".parse().unwrap(),
            status: status.to_string(),
        }
    }

    #[test]
    fn known_status_converts() {
        let booking = row("confirmed").into_booking().unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.slip_id, 2);
    }

    #[test]
    fn unknown_status_drops_row() {
        assert!(row("refunded").into_booking().is_none());
    }
}
