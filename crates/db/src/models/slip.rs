use moorage_core::slip::Slip;
use moorage_core::types::DbId;
use sqlx::FromRow;

/// A row from the `slips` table.
#[derive(Debug, Clone, FromRow)]
pub struct SlipRow {
    pub id: DbId,
    pub marina_id: DbId,
    pub slip_number: String,
    pub length_meters: f64,
    pub width_meters: f64,
    pub depth_meters: Option<f64>,
    pub price_per_day: f64,
    pub is_available: bool,
}

impl From<SlipRow> for Slip {
    fn from(row: SlipRow) -> Self {
        Slip {
            id: row.id,
            marina_id: row.marina_id,
            slip_number: row.slip_number,
            length_meters: row.length_meters,
            width_meters: row.width_meters,
            depth_meters: row.depth_meters,
            price_per_day: row.price_per_day,
            is_available: row.is_available,
        }
    }
}
