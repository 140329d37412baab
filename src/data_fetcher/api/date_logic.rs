//! Week arithmetic for the weekly schedule resource

use crate::error::AppError;
use chrono::{Datelike, Local, NaiveDate, TimeDelta, Utc};
use tracing::info;

/// Monday of the week `week_offset` weeks away from the current local week.
pub fn week_start_for_offset(week_offset: i64) -> Result<NaiveDate, AppError> {
    let today = Utc::now().with_timezone(&Local).date_naive();
    week_start_for_offset_from(today, week_offset)
}

/// Deterministic form of [`week_start_for_offset`] with an injected "today".
///
/// Offset 0 is the Monday on or before `today`, -1 the Monday before that.
pub fn week_start_for_offset_from(
    today: NaiveDate,
    week_offset: i64,
) -> Result<NaiveDate, AppError> {
    let days_since_monday = i64::from(today.weekday().num_days_from_monday());
    let shift = TimeDelta::try_weeks(week_offset)
        .and_then(|weeks| weeks.checked_sub(&TimeDelta::days(days_since_monday)))
        .ok_or_else(|| {
            AppError::datetime_parse_error(format!("Week offset {week_offset} is out of range"))
        })?;

    let monday = today.checked_add_signed(shift).ok_or_else(|| {
        AppError::datetime_parse_error(format!("Week offset {week_offset} is out of range"))
    })?;

    info!("Week offset {week_offset} from {today} starts on {monday}");
    Ok(monday)
}
