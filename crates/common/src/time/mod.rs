//! Local-day time math
//!
//! Everything that touches calendar-day boundaries lives here so that the
//! rest of the engine can treat "a day" as a [`NaiveDate`] plus a configured
//! timezone. Day keys are canonical `YYYY-MM-DD` strings: queries made at any
//! time of day within the same local wall-clock day collide to the same key.

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Canonical day-key format (timezone-stable local calendar day)
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical cache key for a local calendar day
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Local calendar day that contains the given instant
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Resolve a local wall-clock date+time to a UTC instant.
///
/// On a DST gap the earliest valid instant after the requested wall time is
/// used; on an ambiguous wall time the earlier mapping wins.
pub fn local_datetime(date: NaiveDate, time: NaiveTime, tz: Tz) -> DateTime<Utc> {
    let mut naive = date.and_time(time);
    // A DST gap is at most a few hours wide; step forward until the wall
    // time exists.
    for _ in 0..4 {
        if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
            return dt.with_timezone(&Utc);
        }
        naive = naive + Duration::hours(1);
    }
    // Unreachable for real timezones; degrade to interpreting the wall time
    // as UTC rather than panicking.
    Utc.from_utc_datetime(&date.and_time(time))
}

/// Half-open UTC window `[start, end)` covering one local calendar day
pub fn day_bounds(date: NaiveDate, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = local_datetime(date, NaiveTime::MIN, tz);
    let next = date.checked_add_days(Days::new(1)).unwrap_or(date);
    let end = local_datetime(next, NaiveTime::MIN, tz);
    (start, end)
}

/// The `days` consecutive calendar days starting at `start`
pub fn day_window(start: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..days).filter_map(|i| start.checked_add_days(Days::new(u64::from(i)))).collect()
}
