use crate::constants::{GAME_DATE_TIME_FORMAT, GAME_DISPLAY_FORMAT};
use crate::error::AppError;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};
use std::fmt::Display;

/// Parses a kickoff timestamp such as `20130302T210000+0000`.
///
/// The trailing `±HHMM` offset is honoured. A timestamp without an offset
/// (or with a bare `Z`) is taken as UTC.
pub fn parse_game_date_time(timestamp: &str) -> Result<DateTime<FixedOffset>, AppError> {
    let timestamp = timestamp.trim();
    let with_offset = format!("{GAME_DATE_TIME_FORMAT}%z");

    if let Ok(parsed) = DateTime::parse_from_str(timestamp, &with_offset) {
        return Ok(parsed);
    }

    let naive_part = timestamp.strip_suffix('Z').unwrap_or(timestamp);
    NaiveDateTime::parse_from_str(naive_part, GAME_DATE_TIME_FORMAT)
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|e| {
            AppError::datetime_parse_error(format!(
                "Invalid game timestamp '{timestamp}': {e}"
            ))
        })
}

/// Formats a kickoff timestamp in the host's local time as `MM/DD HH:MM`.
pub fn format_game_date_time(timestamp: &str) -> Result<String, AppError> {
    format_game_date_time_in_timezone(timestamp, &Local)
}

/// Formats a kickoff timestamp as `MM/DD HH:MM` in the given timezone.
/// This allows deterministic testing without depending on the host zone.
pub fn format_game_date_time_in_timezone<Tz>(timestamp: &str, tz: &Tz) -> Result<String, AppError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let kickoff = parse_game_date_time(timestamp)?;
    Ok(kickoff
        .with_timezone(tz)
        .format(GAME_DISPLAY_FORMAT)
        .to_string())
}
