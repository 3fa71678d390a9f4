use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono_tz::Tz;
use parking_lot::Mutex;
use tracing::debug;

use crate::cells::make_series_cells;
use crate::data_types::{Cell, TimeRange, TimeSeries};
use crate::error::Result;

/// Everything the cell list depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellKey {
    series: u64,
    range: TimeRange,
    tz: Tz,
    height: u64,
    width: u64,
}

impl CellKey {
    pub fn new(series: u64, range: TimeRange, tz: Tz, height: f64, width: f64) -> Self {
        Self {
            series,
            range,
            tz,
            height: height.to_bits(),
            width: width.to_bits(),
        }
    }
}

/// Hash of the timestamps and values. Owners of an immutable series compute
/// it once and pass it to [`CellCache::get_or_compute`].
pub fn fingerprint(series: &TimeSeries) -> u64 {
    let mut hasher = DefaultHasher::new();
    series.times_ms.hash(&mut hasher);
    for value in &series.values {
        value.map(f64::to_bits).hash(&mut hasher);
    }
    hasher.finish()
}

/// Remembers the most recent cell list so hover re-renders skip bucketing.
#[derive(Debug, Default)]
pub struct CellCache {
    last: Mutex<Option<(CellKey, Arc<[Cell]>)>>,
}

impl CellCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `series_fingerprint` must be [`fingerprint`] of `series`.
    pub fn get_or_compute(
        &self,
        series: &TimeSeries,
        series_fingerprint: u64,
        range: TimeRange,
        tz: Tz,
        height: f64,
        width: f64,
    ) -> Result<Arc<[Cell]>> {
        let key = CellKey::new(series_fingerprint, range, tz, height, width);
        let mut last = self.last.lock();
        if let Some((cached_key, cells)) = last.as_ref() {
            if *cached_key == key {
                debug!(cells = cells.len(), "cell cache hit");
                return Ok(Arc::clone(cells));
            }
        }

        debug!(samples = series.len(), "cell cache miss");
        let cells: Arc<[Cell]> = make_series_cells(series, tz, range, height, width)?.into();
        *last = Some((key, Arc::clone(&cells)));
        Ok(cells)
    }

    pub fn clear(&self) {
        *self.last.lock() = None;
    }
}
