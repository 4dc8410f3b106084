//! Age in whole days between birth and measurement.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::AgeError;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days from `birth` to `measured`.
///
/// Negative when the measurement predates the birth date; callers that care
/// (age formatting, z-score range checks) handle that themselves.
pub fn age_in_days(birth: NaiveDate, measured: NaiveDate) -> i64 {
    measured.signed_duration_since(birth).num_days()
}

/// Whole days between two ISO 8601 dates or timestamps.
///
/// Accepts `YYYY-MM-DD` (midnight UTC), `YYYY-MM-DDTHH:MM:SS[.fff]` (UTC) and
/// RFC 3339 timestamps with an offset. The millisecond difference is divided
/// by the length of a day and floored, so a measurement 36 hours before
/// birth is day -2.
///
/// # Errors
///
/// Returns [`AgeError::InvalidDate`] if either string cannot be parsed.
pub fn age_in_days_iso(birth: &str, measured: &str) -> Result<i64, AgeError> {
    let birth = parse_instant(birth)?;
    let measured = parse_instant(measured)?;
    let millis = measured.signed_duration_since(birth).num_milliseconds();
    Ok(millis.div_euclid(MILLIS_PER_DAY))
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns [`AgeError::InvalidDate`] for anything else.
pub fn parse_date(text: &str) -> Result<NaiveDate, AgeError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| AgeError::InvalidDate {
        text: text.to_string(),
    })
}

fn parse_instant(text: &str) -> Result<DateTime<Utc>, AgeError> {
    let trimmed = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    Err(AgeError::InvalidDate {
        text: text.to_string(),
    })
}
