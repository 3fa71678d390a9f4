//! Assembles everything a renderer needs for one frame of the carpet plot.

use std::sync::Arc;

use chrono_tz::Tz;
use rayon::prelude::*;
use tracing::debug;

use crate::cache::{fingerprint, CellCache};
use crate::color::{ColorScale, Rgba};
use crate::data_types::{select_first_series, CarpetOptions, Cell, Frame, PixelRect, TimeRange, TimeSeries};
use crate::day_axis::{hour_ticks, HourTick};
use crate::error::Result;
use crate::interaction::Interaction;
use crate::layout::PlotLayout;
use crate::theme::Theme;
use crate::time_scale::{DayTick, TimeScale};
use crate::utils::date_formatter::format_timestamp;
use crate::utils::format_value;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

/// A colored, pixel-snapped cell, relative to the cell area origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub index: usize,
    pub rect: PixelRect,
    pub fill: Rgba,
    pub stroke: Option<Stroke>,
}

/// A dashed outline drawn over a hovered or selected cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightRect {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgba,
    pub stroke: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub timestamp: String,
    pub label: String,
    pub value: String,
    pub color: Rgba,
}

/// One laid-out frame. Cells are in normalized `[0, 1]` space; `rects` are
/// the same cells in pixels of the inner area.
#[derive(Clone, Debug)]
pub struct Scene {
    pub layout: PlotLayout,
    pub time_zone: Tz,
    pub cells: Arc<[Cell]>,
    pub rects: Vec<CellRect>,
    pub x_ticks: Vec<DayTick>,
    pub y_ticks: Vec<HourTick>,
    /// Color ramp over the value domain, low to high.
    pub legend: Vec<Rgba>,
}

impl Scene {
    /// Index of the cell under a point of the inner area, if any.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<usize> {
        self.rects
            .iter()
            .find(|r| r.rect.contains(x, y))
            .map(|r| r.index)
    }
}

/// A series bound to its options, theme and color scale.
#[derive(Debug)]
pub struct CarpetPlot {
    series: TimeSeries,
    options: CarpetOptions,
    theme: Theme,
    color_scale: ColorScale,
    series_fingerprint: u64,
    cache: CellCache,
}

impl CarpetPlot {
    pub fn new(series: TimeSeries, options: CarpetOptions, theme: Theme) -> Result<Self> {
        let domain = match (options.color.min, options.color.max) {
            (Some(min), Some(max)) => (min, max),
            (min, max) => {
                let (data_min, data_max) = series.min_max().unwrap_or((0.0, 1.0));
                (min.unwrap_or(data_min), max.unwrap_or(data_max))
            }
        };
        let color_scale = ColorScale::new(&options.color, domain, &theme)?;
        let series_fingerprint = fingerprint(&series);
        Ok(Self {
            series,
            options,
            theme,
            color_scale,
            series_fingerprint,
            cache: CellCache::new(),
        })
    }

    /// Picks the series out of the panel's frames using the configured field
    /// names; a configured unit overrides the field's own.
    pub fn from_frames(frames: &[Frame], options: CarpetOptions, theme: Theme) -> Result<Self> {
        let mut series = select_first_series(
            frames,
            options.time_field_name.as_deref(),
            options.value_field.name.as_deref(),
        )?;
        if let Some(unit) = options.value_field.unit.clone().filter(|u| !u.is_empty()) {
            series.unit = Some(unit);
        }
        Self::new(series, options, theme)
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn options(&self) -> &CarpetOptions {
        &self.options
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn color_scale(&self) -> &ColorScale {
        &self.color_scale
    }

    /// Cache fingerprint of the series, taken once at construction.
    pub fn series_fingerprint(&self) -> u64 {
        self.series_fingerprint
    }

    pub fn scene(&self, width: f64, height: f64, range: TimeRange, tz: Tz) -> Result<Scene> {
        let layout = PlotLayout::compute(width, height, self.options.axes, self.theme.font_size);
        let cells = self
            .cache
            .get_or_compute(&self.series, self.series_fingerprint, range, tz, 1.0, 1.0)?;

        let (w, h) = (layout.inner_width as f32, layout.inner_height as f32);
        let stroke = (self.options.gap_width > 0.0).then(|| Stroke {
            color: self.theme.background,
            width: self.options.gap_width,
        });
        let rects: Vec<CellRect> = cells
            .par_iter()
            .enumerate()
            .map(|(index, cell)| CellRect {
                index,
                rect: cell.pixel_rect(w, h),
                fill: self.color_scale.color_of(cell.value),
                stroke,
            })
            .collect();

        let x_ticks = if self.options.axes.show_x {
            TimeScale::new(range, tz, layout.inner_width)?.ticks()
        } else {
            Vec::new()
        };
        let y_ticks = if self.options.axes.show_y {
            hour_ticks(layout.inner_height, self.theme.axis_font_size)
        } else {
            Vec::new()
        };

        debug!(
            width,
            height,
            cells = cells.len(),
            x_ticks = x_ticks.len(),
            "assembled carpet scene"
        );
        Ok(Scene {
            layout,
            time_zone: tz,
            cells,
            rects,
            x_ticks,
            y_ticks,
            legend: self.color_scale.stops(self.options.color.steps),
        })
    }

    /// Outlines for the cells the interaction currently highlights.
    ///
    /// The outline color is taken from the far end of the scale so it
    /// contrasts with the cell it frames.
    pub fn highlights(&self, scene: &Scene, interaction: &Interaction) -> Vec<HighlightRect> {
        let (w, h) = (scene.layout.inner_width, scene.layout.inner_height);
        let (min, max) = self.color_scale.domain();
        let midpoint = (min + max) / 2.0;

        interaction
            .highlighted(&scene.cells)
            .into_iter()
            .filter_map(|index| {
                let cell = scene.cells.get(index)?;
                let stroke = if cell.value > midpoint {
                    self.color_scale.color_of(min)
                } else {
                    self.color_scale.color_of(max)
                };
                Some(HighlightRect {
                    index,
                    x: cell.left * w - 0.5,
                    y: cell.top * h,
                    width: w * cell.width() + 0.5,
                    height: h * cell.height() - 0.5,
                    fill: self.theme.highlight,
                    stroke,
                })
            })
            .collect()
    }

    pub fn tooltip(&self, scene: &Scene, interaction: &Interaction) -> Option<Tooltip> {
        let cell = scene.cells.get(interaction.state().hovered()?)?;
        let (_, max) = self.color_scale.domain();
        Some(Tooltip {
            timestamp: format_timestamp(cell.time * 1000, scene.time_zone),
            label: self.series.label().to_string(),
            value: format_value(cell.value, self.series.unit.as_deref()),
            color: self.color_scale.color_of(max),
        })
    }
}
