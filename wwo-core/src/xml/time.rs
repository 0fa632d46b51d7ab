//! Turning the provider's split date, time and offset fields into chrono values.
//!
//! The API sends times in three shapes:
//! - compact digit strings with no separator (`"0"`, `"130"`, `"2345"`),
//! - 12-hour clock strings (`"05:02 AM"`) for astronomy and observation time,
//! - a `yyyy-MM-dd HH:mm` local timestamp paired with an offset in decimal hours.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use thiserror::Error;

/// Why a time-like field could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TimeError(String);

/// Parse a compact `H`, `HMM` or `HHMM` time.
///
/// The last two digits are minutes and anything before them is the hour;
/// `"0"` is midnight.
pub fn parse_compact_time(raw: &str) -> Result<NaiveTime, TimeError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.len() > 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError(format!(
            "expected a compact time of 1 to 4 digits, got '{raw}'"
        )));
    }

    let split = raw.len().saturating_sub(2);
    let (hours, minutes) = raw.split_at(split);
    let hours: u32 = if hours.is_empty() { 0 } else { parse_digits(hours)? };
    let minutes: u32 = parse_digits(minutes)?;

    NaiveTime::from_hms_opt(hours, minutes, 0)
        .ok_or_else(|| TimeError(format!("{hours:02}:{minutes:02} is not a valid time of day")))
}

fn parse_digits(digits: &str) -> Result<u32, TimeError> {
    digits
        .parse()
        .map_err(|err| TimeError(format!("can't parse '{digits}': {err}")))
}

/// Parse a wall-clock time such as `"05:02 AM"`, `"17:45"` or compact `"1745"`.
pub fn parse_clock_time(raw: &str) -> Result<NaiveTime, TimeError> {
    let raw = raw.trim();
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        return parse_compact_time(raw);
    }

    NaiveTime::parse_from_str(raw, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| TimeError(format!("expected 'hh:mm AM', 'HH:MM' or compact time, got '{raw}'")))
}

/// Parse a clock time that the provider may replace with a fixed sentinel
/// (`"No moonrise"`) when the event doesn't happen that day.
pub fn parse_optional_clock_time(
    raw: &str,
    sentinel: &str,
) -> Result<Option<NaiveTime>, TimeError> {
    if raw.trim() == sentinel {
        return Ok(None);
    }
    parse_clock_time(raw).map(Some)
}

/// Parse a `yyyy-MM-dd` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| TimeError(format!("expected yyyy-MM-dd: {err}")))
}

/// Convert an offset in decimal hours into a fixed offset.
///
/// The integer part gives whole hours and the fractional remainder times 60
/// gives whole minutes, both keeping the sign, so `-0.5` is `-00:30`.
pub fn offset_from_hours(hours: f64) -> Result<FixedOffset, TimeError> {
    if !hours.is_finite() || hours.abs() >= 24.0 {
        return Err(TimeError(format!("UTC offset {hours} is out of range")));
    }

    let whole = hours.trunc();
    let minutes = ((hours - whole) * 60.0).round();
    let seconds = whole as i32 * 3600 + minutes as i32 * 60;

    FixedOffset::east_opt(seconds)
        .ok_or_else(|| TimeError(format!("UTC offset {hours} is out of range")))
}

/// Parse the report-local `yyyy-MM-dd HH:mm` timestamp in the given offset.
pub fn parse_local_time(
    raw: &str,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, TimeError> {
    let raw = raw.trim();
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .map_err(|err| TimeError(format!("expected 'yyyy-MM-dd HH:mm', got '{raw}': {err}")))?;

    at_offset(naive.date(), naive.time(), offset)
        .ok_or_else(|| TimeError(format!("'{raw}' does not exist at offset {offset}")))
}

/// Combine a date and a time of day that are both already in UTC.
pub fn utc_instant(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(time))
}

/// Place a local date and time of day at a fixed offset.
pub fn at_offset(
    date: NaiveDate,
    time: NaiveTime,
    offset: FixedOffset,
) -> Option<DateTime<FixedOffset>> {
    offset.from_local_datetime(&date.and_time(time)).single()
}
