use chrono::{NaiveDate, NaiveTime};
use moorage_core::blocked::BlockedDate;
use moorage_core::types::DbId;
use sqlx::FromRow;

/// A row from the `blocked_dates` table. `slip_id = NULL` blocks the whole
/// marina for the date.
#[derive(Debug, Clone, FromRow)]
pub struct BlockedDateRow {
    pub id: DbId,
    pub marina_id: DbId,
    pub slip_id: Option<DbId>,
    pub blocked_date: NaiveDate,
    pub reason: Option<String>,
    pub is_all_day: bool,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl From<BlockedDateRow> for BlockedDate {
    fn from(row: BlockedDateRow) -> Self {
        BlockedDate {
            id: row.id,
            marina_id: row.marina_id,
            slip_id: row.slip_id,
            blocked_date: row.blocked_date,
            reason: row.reason,
            is_all_day: row.is_all_day,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}
