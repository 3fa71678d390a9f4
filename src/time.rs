//! Calendar helpers in a display time zone.
//!
//! All instants are UTC milliseconds. Day boundaries are local midnights of the
//! given zone, so a day lasts 23, 24 or 25 hours around DST transitions.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{CarpetError, Result};

pub const DAY_MS: i64 = 86_400_000;

/// Parses an IANA zone name. `"utc"` and `"browser"` (and the empty string)
/// resolve to UTC, since there is no browser zone outside the host.
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    match name {
        "" | "utc" | "browser" => Ok(Tz::UTC),
        other => other
            .parse::<Tz>()
            .map_err(|_| CarpetError::InvalidTimeZone(other.to_string())),
    }
}

pub fn ms_to_secs(ms: i64) -> i64 {
    ms.div_euclid(1000)
}

pub fn to_local(tz: Tz, ms: i64) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(ms).single()
}

/// The first instant of `date` in `tz`.
///
/// Midnight can fall into a DST gap (some zones switch at 00:00); the day then
/// starts at the first local time that exists.
pub fn local_midnight(tz: Tz, date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    for step in 0..=16 {
        let candidate = midnight + Duration::minutes(15 * step);
        if let Some(dt) = tz.from_local_datetime(&candidate).earliest() {
            return dt.timestamp_millis();
        }
    }
    midnight.and_utc().timestamp_millis()
}

/// Local midnight at or before `ms`.
pub fn start_of_day(tz: Tz, ms: i64) -> i64 {
    match to_local(tz, ms) {
        Some(dt) => local_midnight(tz, dt.date_naive()),
        None => ms.div_euclid(DAY_MS) * DAY_MS,
    }
}

/// Local midnight of the calendar day following the day containing `ms`.
pub fn next_day(tz: Tz, ms: i64) -> i64 {
    match to_local(tz, ms).and_then(|dt| dt.date_naive().succ_opt()) {
        Some(date) => local_midnight(tz, date),
        None => ms.div_euclid(DAY_MS) * DAY_MS + DAY_MS,
    }
}

/// Last millisecond of the day containing `ms`.
pub fn end_of_day(tz: Tz, ms: i64) -> i64 {
    next_day(tz, ms) - 1
}

/// Length of the local day containing `ms`, in milliseconds.
pub fn day_length(tz: Tz, ms: i64) -> i64 {
    let start = start_of_day(tz, ms);
    next_day(tz, start) - start
}

/// Number of local days touched by `[from, to]`: `1 + day boundaries crossed`.
/// Zero or negative when `to` falls on an earlier local day than `from`.
pub fn day_count(tz: Tz, from: i64, to: i64) -> i64 {
    let (Some(a), Some(b)) = (to_local(tz, from), to_local(tz, to)) else {
        return 1 + (to.div_euclid(DAY_MS) - from.div_euclid(DAY_MS));
    };
    1 + (b.date_naive() - a.date_naive()).num_days()
}

/// Whole calendar months from `from` to `to` (truncated toward zero).
pub fn months_between(tz: Tz, from: i64, to: i64) -> i64 {
    let (Some(a), Some(b)) = (to_local(tz, from), to_local(tz, to)) else {
        return (to - from) / (30 * DAY_MS);
    };
    let (a, b, sign) = if a <= b { (a, b, 1) } else { (b, a, -1) };
    let mut months =
        (b.year() as i64 - a.year() as i64) * 12 + (b.month() as i64 - a.month() as i64);
    let a_rest = (a.day(), a.time());
    let b_rest = (b.day(), b.time());
    if months > 0 && b_rest < a_rest {
        months -= 1;
    }
    sign * months
}
