//! carpet_plot: day x time-of-day heatmaps of a single time series.
//!
//! Each calendar day of the display zone is a column, each sample a cell
//! whose height is the series' time step. [`CarpetPlot`] turns a series and
//! its options into a [`Scene`] a renderer can paint.

pub mod cache;
pub mod cells;
pub mod color;
pub mod data_types;
pub mod day_axis;
pub mod error;
pub mod interaction;
pub mod layout;
#[cfg(feature = "polars")]
pub mod polars_source;
pub mod render;
pub mod scene;
pub mod theme;
pub mod time;
pub mod time_scale;
pub mod utils;

pub use cells::{make_cells, make_series_cells, time_step};
pub use color::{ColorScale, ColorScheme, Rgba};
pub use data_types::{CarpetOptions, Cell, Frame, Split, TimeRange, TimeSeries};
pub use error::{CarpetError, Result};
pub use interaction::{AbsoluteTimeRange, Interaction, PointerEvent, PointerState};
pub use scene::{CarpetPlot, Scene};
pub use theme::Theme;
pub use time_scale::TimeScale;
