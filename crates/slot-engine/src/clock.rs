//! Conversion between `"HH:MM"` clock text and minutes from midnight.
//!
//! Hours `0..=23` go through `chrono::NaiveTime`. The literal `"24:00"` is
//! accepted as the end of the day (1440), which `NaiveTime` cannot represent.

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, SlotError};
use crate::interval::{Interval, DAY_MINUTES};

const END_OF_DAY: &str = "24:00";

/// Parse `"H:MM"` or `"HH:MM"` into minutes from midnight.
///
/// # Errors
/// Returns `SlotError::InvalidClock` for non-numeric fields, a missing colon,
/// a minute field that is not two digits, or a time past `24:00`.
pub fn parse_clock(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let invalid = || SlotError::InvalidClock(text.to_string());

    if trimmed == END_OF_DAY {
        return Ok(DAY_MINUTES);
    }

    let (hours, minutes) = trimmed.split_once(':').ok_or_else(invalid)?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(invalid());
    }

    let time = NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| invalid())?;
    Ok(i64::from(time.hour()) * 60 + i64::from(time.minute()))
}

/// Render minutes from midnight as zero-padded `"HH:MM"`.
///
/// Negative input renders as `"00:00"`; 1440 renders as `"24:00"`.
pub fn format_clock(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parse a pair of clock strings into a validated interval.
///
/// # Errors
/// Propagates `SlotError::InvalidClock` from either bound and
/// `SlotError::InvalidInterval` when the start is after the end.
pub fn parse_range(start: &str, end: &str) -> Result<Interval> {
    Interval::checked(parse_clock(start)?, parse_clock(end)?)
}

/// Render an interval as `"[HH:MM, HH:MM]"`.
pub fn format_range(interval: &Interval) -> String {
    format!(
        "[{}, {}]",
        format_clock(interval.start),
        format_clock(interval.end)
    )
}
