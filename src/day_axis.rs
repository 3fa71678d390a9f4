//! Vertical time-of-day axis.

use chrono_tz::Tz;

use crate::time;
use crate::utils::date_formatter::format_hour;

/// Maps an instant to its offset within its local day column.
///
/// `y = height * elapsed / day_length`, where both are measured from the local
/// midnight of that very day, so 23 h and 25 h DST days fill the full column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeOfDayAxis {
    tz: Tz,
    height: f64,
}

impl TimeOfDayAxis {
    pub fn new(tz: Tz, height: f64) -> Self {
        Self { tz, height }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// `ms` in UTC milliseconds.
    pub fn map(&self, ms: i64) -> f64 {
        let start = time::start_of_day(self.tz, ms);
        let length = time::next_day(self.tz, start) - start;
        if length <= 0 {
            return 0.0;
        }
        self.height * (ms - start) as f64 / length as f64
    }

    /// `secs` in seconds since epoch; fractional seconds are kept.
    pub fn map_secs(&self, secs: f64) -> f64 {
        self.map((secs * 1000.0).round() as i64)
    }
}

/// An hour mark on the time-of-day axis.
#[derive(Clone, Debug, PartialEq)]
pub struct HourTick {
    pub hour: u32,
    pub y: f64,
    /// Only every `tick_mod`-th hour carries a label.
    pub label: Option<String>,
}

/// Hour ticks 0..=24 for an axis `height` pixels tall, labelled sparsely
/// enough that labels of `font_size` do not overlap.
pub fn hour_ticks(height: f64, font_size: f64) -> Vec<HourTick> {
    let hour_height = height / 24.0;
    let tick_mod = if hour_height > 0.0 {
        ((font_size * 1.2) / hour_height).ceil().max(1.0) as u32
    } else {
        24
    };

    (0..=24u32)
        .map(|hour| HourTick {
            hour,
            y: hour as f64 * height / 24.0 + 0.5,
            label: (hour % tick_mod == 0).then(|| format_hour(hour)),
        })
        .collect()
}
