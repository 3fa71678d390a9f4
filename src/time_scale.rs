//! Horizontal calendar scale: maps instants onto the day columns of the plot.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeZone, Weekday};
use chrono_tz::Tz;
use tracing::warn;

use crate::data_types::TimeRange;
use crate::error::{CarpetError, Result};
use crate::time::{self, DAY_MS};
use crate::utils::date_formatter::{format_day_tick, DayTickFormat};

/// Number of ticks the scale aims for.
const TICK_COUNT: i64 = 10;
/// Ranges longer than this many calendar months label months instead of days.
const LONG_RANGE_MONTHS: i64 = 6;

/// Linear map from UTC time over `[startOfDay(from), endOfDay(to)]` to `[0, width]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    tz: Tz,
    range: TimeRange,
    day_from: i64,
    day_to: i64,
    width: f64,
}

impl TimeScale {
    pub fn new(range: TimeRange, tz: Tz, width: f64) -> Result<Self> {
        if range.to < range.from {
            warn!(from = range.from, to = range.to, "rejecting reversed time range");
            return Err(CarpetError::InvalidRange {
                from: range.from,
                to: range.to,
            });
        }

        let day_from = time::start_of_day(tz, range.from);
        let day_to = time::end_of_day(tz, range.to);
        if time::day_count(tz, day_from, day_to) <= 0 {
            warn!(from = range.from, to = range.to, "time range covers no day");
            return Err(CarpetError::InvalidRange {
                from: range.from,
                to: range.to,
            });
        }

        Ok(Self {
            tz,
            range,
            day_from,
            day_to,
            width,
        })
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// `(startOfDay(from), endOfDay(to))` in UTC milliseconds.
    pub fn domain(&self) -> (i64, i64) {
        (self.day_from, self.day_to)
    }

    pub fn num_days(&self) -> i64 {
        time::day_count(self.tz, self.day_from, self.day_to)
    }

    pub fn map(&self, ms: i64) -> f64 {
        let span = (self.day_to - self.day_from) as f64;
        self.width * (ms - self.day_from) as f64 / span
    }

    pub fn invert(&self, x: f64) -> i64 {
        if self.width <= 0.0 {
            return self.day_from;
        }
        let span = (self.day_to - self.day_from) as f64;
        self.day_from + (x / self.width * span).round() as i64
    }

    /// Whether the visible range is long enough to label months.
    pub fn is_long(&self) -> bool {
        time::months_between(self.tz, self.range.from, self.range.to) > LONG_RANGE_MONTHS
    }

    /// Day-aligned axis ticks, each moved to local noon so DST shifts never
    /// push a label into a neighbouring column.
    pub fn ticks(&self) -> Vec<DayTick> {
        let long = self.is_long();
        let format = if long {
            DayTickFormat::YearMonth
        } else {
            DayTickFormat::MonthDay
        };

        let mut ticks: Vec<DayTick> = Vec::new();
        for date in self.natural_tick_dates() {
            let date = if long {
                date.with_day(1).unwrap_or(date)
            } else {
                date
            };
            let time_ms = local_noon(self.tz, date);
            if ticks.last().is_some_and(|t| t.time_ms == time_ms) {
                continue;
            }
            let x = self.map(time_ms);
            if x < 0.0 || x > self.width {
                continue;
            }
            ticks.push(DayTick {
                time_ms,
                x,
                label: format_day_tick(date, format),
            });
        }
        ticks
    }

    fn natural_tick_dates(&self) -> Vec<NaiveDate> {
        let (Some(first), Some(last)) = (
            time::to_local(self.tz, self.day_from),
            time::to_local(self.tz, self.day_to),
        ) else {
            return Vec::new();
        };
        let interval = TickInterval::for_span(self.day_to - self.day_from);
        let mut dates = Vec::new();
        let mut date = first.date_naive();
        let last = last.date_naive();
        while date <= last {
            if interval.accepts(date) {
                dates.push(date);
            }
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
        dates
    }
}

/// A labelled tick on the calendar axis.
#[derive(Clone, Debug, PartialEq)]
pub struct DayTick {
    pub time_ms: i64,
    pub x: f64,
    pub label: String,
}

/// Calendar intervals usable as tick spacing, from finest to coarsest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickInterval {
    Days(u32),
    Week,
    Months(u32),
    Years(i32),
}

impl TickInterval {
    const LADDER: [(TickInterval, i64); 6] = [
        (TickInterval::Days(1), DAY_MS),
        (TickInterval::Days(2), 2 * DAY_MS),
        (TickInterval::Week, 7 * DAY_MS),
        (TickInterval::Months(1), 30 * DAY_MS),
        (TickInterval::Months(3), 90 * DAY_MS),
        (TickInterval::Years(1), 365 * DAY_MS),
    ];

    /// Picks the interval whose length is closest (by ratio) to `span / TICK_COUNT`.
    pub fn for_span(span_ms: i64) -> Self {
        let target = span_ms as f64 / TICK_COUNT as f64;
        let ladder = Self::LADDER;
        if target <= ladder[0].1 as f64 {
            return ladder[0].0;
        }
        let year = ladder[ladder.len() - 1].1 as f64;
        if target >= year {
            return TickInterval::Years((target / year).round().max(1.0) as i32);
        }
        for pair in ladder.windows(2) {
            let (lo, lo_ms) = pair[0];
            let (hi, hi_ms) = pair[1];
            if target < hi_ms as f64 {
                return if target / (lo_ms as f64) < hi_ms as f64 / target {
                    lo
                } else {
                    hi
                };
            }
        }
        ladder[ladder.len() - 1].0
    }

    pub fn accepts(&self, date: NaiveDate) -> bool {
        match *self {
            TickInterval::Days(step) => date.day0() % step.max(1) == 0,
            TickInterval::Week => date.weekday() == Weekday::Sun,
            TickInterval::Months(step) => date.day() == 1 && date.month0() % step.max(1) == 0,
            TickInterval::Years(step) => {
                date.ordinal() == 1 && date.year().rem_euclid(step.max(1)) == 0
            }
        }
    }
}

fn local_noon(tz: Tz, date: NaiveDate) -> i64 {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
    match tz.from_local_datetime(&date.and_time(noon)).earliest() {
        Some(dt) => dt.timestamp_millis(),
        None => time::local_midnight(tz, date) + DAY_MS / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> i64 {
        Tz::UTC
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_interval_choice() {
        assert_eq!(TickInterval::for_span(3 * DAY_MS), TickInterval::Days(1));
        assert_eq!(TickInterval::for_span(14 * DAY_MS), TickInterval::Days(1));
        assert_eq!(TickInterval::for_span(31 * DAY_MS), TickInterval::Days(2));
        assert_eq!(TickInterval::for_span(70 * DAY_MS), TickInterval::Week);
        assert_eq!(TickInterval::for_span(365 * DAY_MS), TickInterval::Months(1));
        assert_eq!(TickInterval::for_span(3 * 365 * DAY_MS), TickInterval::Months(3));
    }

    #[test]
    fn test_reversed_range_rejected() {
        let r = TimeRange::new(utc(2024, 1, 2, 0), utc(2024, 1, 1, 0));
        assert!(matches!(
            TimeScale::new(r, Tz::UTC, 100.0),
            Err(CarpetError::InvalidRange { .. })
        ));

        // also within the same day
        let r = TimeRange::new(utc(2024, 1, 1, 12), utc(2024, 1, 1, 11));
        assert!(TimeScale::new(r, Tz::UTC, 100.0).is_err());
    }

    #[test]
    fn test_map_is_day_aligned() {
        let r = TimeRange::new(utc(2024, 1, 1, 10), utc(2024, 1, 4, 3));
        let scale = TimeScale::new(r, Tz::UTC, 400.0).unwrap();
        assert_eq!(scale.num_days(), 4);
        assert_eq!(scale.map(utc(2024, 1, 1, 0)), 0.0);
        let x = scale.map(utc(2024, 1, 3, 0));
        assert!((x - 200.0).abs() < 1e-3);
        assert_eq!(scale.invert(0.0), utc(2024, 1, 1, 0));
    }

    #[test]
    fn test_ticks_at_noon() {
        let r = TimeRange::new(utc(2024, 1, 1, 0), utc(2024, 1, 3, 0));
        let scale = TimeScale::new(r, Tz::UTC, 300.0).unwrap();
        let ticks = scale.ticks();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["01-01", "01-02", "01-03"]);
        assert_eq!(ticks[0].time_ms, utc(2024, 1, 1, 12));
        assert!((ticks[1].x - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_long_range_ticks_are_months() {
        let r = TimeRange::new(utc(2023, 1, 15, 0), utc(2024, 1, 15, 0));
        let scale = TimeScale::new(r, Tz::UTC, 1200.0).unwrap();
        assert!(scale.is_long());
        let ticks = scale.ticks();
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("2023-02"));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("2024-01"));
        assert!(ticks.windows(2).all(|w| w[0].x < w[1].x));
    }
}
