//! Shared query parameter types for API handlers.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Extracted alongside [`StayParams`] by the marina search handler; any
/// listing endpoint gains pagination by adding a second `Query` extractor
/// rather than re-declaring the fields. Values are clamped in the
/// repository layer via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// An optional `?check_in=&check_out=` pair shared by search and checkout
/// endpoints. Dates are ISO-8601 (`YYYY-MM-DD`).
#[derive(Debug, Deserialize)]
pub struct StayParams {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl StayParams {
    /// Resolve the pair into a validated stay range.
    ///
    /// Returns `Ok(None)` when neither date was supplied (date filtering is
    /// opt-in), a 400 when only one was supplied or when the range is not
    /// strictly increasing. The engine itself never errors on bad ranges;
    /// this boundary is where ordering is enforced.
    pub fn resolve(&self) -> Result<Option<(NaiveDate, NaiveDate)>, AppError> {
        match (self.check_in, self.check_out) {
            (None, None) => Ok(None),
            (Some(check_in), Some(check_out)) => {
                if check_in >= check_out {
                    return Err(AppError::BadRequest(
                        "check_in must be strictly before check_out".to_string(),
                    ));
                }
                Ok(Some((check_in, check_out)))
            }
            _ => Err(AppError::BadRequest(
                "check_in and check_out must be supplied together".to_string(),
            )),
        }
    }

    /// Like [`StayParams::resolve`], but the range is mandatory.
    pub fn require(&self) -> Result<(NaiveDate, NaiveDate), AppError> {
        self.resolve()?.ok_or_else(|| {
            AppError::BadRequest("check_in and check_out are required".to_string())
        })
    }
}
