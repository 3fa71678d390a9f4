//! Cell bucketing: turns a (time, value) series into day-column rectangles.

use chrono_tz::Tz;
use tracing::{debug, trace, warn};

use crate::data_types::{Cell, Split, TimeRange, TimeSeries};
use crate::day_axis::TimeOfDayAxis;
use crate::error::{CarpetError, Result};
use crate::time;
use crate::time_scale::TimeScale;

/// A cell ending less than this past midnight is clipped to its column
/// instead of being split.
pub const SPLIT_TOLERANCE_SECS: i64 = 60;

/// Smallest positive gap between consecutive timestamps, in seconds.
///
/// `None` when fewer than two distinct timestamps exist.
pub fn time_step(times_ms: &[i64]) -> Option<f64> {
    time_step_ms(times_ms).map(|ms| ms as f64 / 1000.0)
}

fn time_step_ms(times_ms: &[i64]) -> Option<i64> {
    times_ms
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|gap| *gap > 0)
        .min()
}

/// The day column currently being filled.
///
/// Consecutive columns share their boundary: `following` reuses `right` as the
/// next `left` rather than mapping the boundary again.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DayColumn {
    start: i64,
    next: i64,
    left: f64,
    right: f64,
}

impl DayColumn {
    fn containing(scale: &TimeScale, ms: i64) -> Self {
        let tz = scale.time_zone();
        let start = time::start_of_day(tz, ms);
        let next = time::next_day(tz, start);
        Self {
            start,
            next,
            left: scale.map(start),
            right: scale.map(next),
        }
    }

    fn following(&self, scale: &TimeScale) -> Self {
        let next = time::next_day(scale.time_zone(), self.next);
        Self {
            start: self.next,
            next,
            left: self.right,
            right: scale.map(next),
        }
    }

    fn contains(&self, ms: i64) -> bool {
        ms >= self.start && ms < self.next
    }

    /// Moves forward to the column holding `ms`.
    fn advance_to(&self, scale: &TimeScale, ms: i64) -> Self {
        let column = if ms >= self.next && ms < time::next_day(scale.time_zone(), self.next) {
            self.following(scale)
        } else {
            Self::containing(scale, ms)
        };
        trace!(start = column.start, left = column.left, "advanced day column");
        column
    }
}

/// Buckets a series into cells over a `width` x `height` plot.
///
/// Each non-null sample covers `[t, t + time_step)`. A sample whose interval
/// runs more than [`SPLIT_TOLERANCE_SECS`] past the next local midnight yields
/// two cells tagged [`Split::First`] and [`Split::Second`]; all others yield one.
/// With a single sample the cell runs to the end of its day.
pub fn make_cells(
    values: &[Option<f64>],
    times_ms: &[i64],
    tz: Tz,
    range: TimeRange,
    height: f64,
    width: f64,
) -> Result<Vec<Cell>> {
    let scale = TimeScale::new(range, tz, width)?;
    if values.len() != times_ms.len() {
        return Err(CarpetError::LengthMismatch {
            times: times_ms.len(),
            values: values.len(),
        });
    }

    let y_axis = TimeOfDayAxis::new(tz, height);
    let step_ms = time_step_ms(times_ms);
    let tolerance_ms = SPLIT_TOLERANCE_SECS * 1000;

    let mut cells = Vec::with_capacity(values.len());
    let mut column: Option<DayColumn> = None;
    let mut splits = 0usize;

    for (&value, &ms) in values.iter().zip(times_ms) {
        let Some(value) = value else { continue };

        let col = match column {
            Some(c) if c.contains(ms) => c,
            Some(c) if ms >= c.next => c.advance_to(&scale, ms),
            _ => DayColumn::containing(&scale, ms),
        };

        let time = time::ms_to_secs(ms);
        let top = y_axis.map(ms);
        let end_ms = match step_ms {
            Some(step) => ms + step,
            None => col.next,
        };
        let bottom = if end_ms < col.next {
            y_axis.map(end_ms)
        } else {
            height
        };

        if end_ms - col.next > tolerance_ms {
            cells.push(Cell {
                time,
                value,
                left: col.left,
                top,
                right: col.right,
                bottom,
                split: Some(Split::First),
            });

            let next_col = col.following(&scale);
            // TODO: chain further columns when one sample spans more than a whole day
            let second_bottom = if end_ms < next_col.next {
                y_axis.map(end_ms)
            } else {
                warn!(time, "sample interval spans more than one day, clipping");
                height
            };
            cells.push(Cell {
                time,
                value,
                left: next_col.left,
                top: 0.0,
                right: next_col.right,
                bottom: second_bottom,
                split: Some(Split::Second),
            });
            splits += 1;
            column = Some(next_col);
        } else {
            cells.push(Cell {
                time,
                value,
                left: col.left,
                top,
                right: col.right,
                bottom,
                split: None,
            });
            column = Some(col);
        }
    }

    debug!(
        samples = values.len(),
        cells = cells.len(),
        splits,
        step_ms = step_ms.unwrap_or_default(),
        "computed carpet cells"
    );
    Ok(cells)
}

/// [`make_cells`] over a selected series.
pub fn make_series_cells(
    series: &TimeSeries,
    tz: Tz,
    range: TimeRange,
    height: f64,
    width: f64,
) -> Result<Vec<Cell>> {
    make_cells(&series.values, &series.times_ms, tz, range, height, width)
}
