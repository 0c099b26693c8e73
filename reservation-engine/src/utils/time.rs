//! Booking window helpers
//!
//! Turn a start time plus a length into the absolute end time the
//! registry stores, refusing instants chrono cannot represent.

use chrono::{Duration, NaiveDateTime};
use shared::{AppError, AppResult};

/// Start + length → end timestamp
pub fn end_after(start: NaiveDateTime, length: Duration) -> AppResult<NaiveDateTime> {
    start.checked_add_signed(length).ok_or_else(|| {
        AppError::out_of_range(format!("{} after {} is out of range", length, start))
    })
}

/// Start + period (hours) → end timestamp
pub fn end_after_hours(start: NaiveDateTime, period_hours: u32) -> AppResult<NaiveDateTime> {
    end_after(start, Duration::hours(i64::from(period_hours)))
}
