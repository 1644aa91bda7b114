//! Day-range arithmetic
//!
//! Converts a half-open `[from, to)` timestamp interval into the UTC
//! calendar days it covers. A calendar day is a `NaiveDate` read as
//! midnight UTC.

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};

/// Calendar days covered by `[from, to)`.
///
/// Both endpoints are truncated to their UTC day before stepping, and the
/// step is one calendar day, so month ends, leap days and year boundaries
/// come out right.
///
/// Returns an empty vector when `from >= to`. It is also empty when both
/// endpoints fall on the same UTC day.
pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<NaiveDate> {
    if from >= to {
        return Vec::new();
    }

    let last = day(to);
    let mut days = Vec::new();
    let mut current = day(from);
    while current < last {
        days.push(current);
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

/// UTC calendar day of a timestamp.
pub fn day(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

/// Midnight UTC on the given date.
///
/// Out-of-range components fall back to the Unix epoch, so this is meant
/// for literals (seed inventory, tests) rather than user input.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}
