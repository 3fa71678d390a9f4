use crate::data_types::AxesOptions;

/// Space reserved around the cell area for the axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
}

/// Panel size split into axis gutters and the inner cell area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    pub padding: Padding,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl PlotLayout {
    /// Gutters scale with `font_size`: the y axis takes three characters,
    /// the x axis one and a half lines.
    pub fn compute(width: f64, height: f64, axes: AxesOptions, font_size: f64) -> Self {
        let padding = font_size / 2.0;
        let y_axis_width = font_size * 3.0;
        let x_axis_height = font_size * 1.5;

        let top = if axes.show_y { padding } else { 0.0 };
        let left = if axes.show_y { y_axis_width } else { padding };
        let bottom = if axes.show_x {
            x_axis_height
        } else if axes.show_y {
            padding
        } else {
            0.0
        };

        Self {
            padding: Padding { top, left, bottom },
            inner_width: (width - left).max(0.0),
            inner_height: (height - top - bottom).max(0.0),
        }
    }

    /// Whether a panel-relative point lies over the cell area.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (x, y) = self.to_inner(x, y);
        x >= 0.0 && y >= 0.0 && x < self.inner_width && y < self.inner_height
    }

    /// Panel-relative point to cell-area coordinates.
    pub fn to_inner(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.padding.left, y - self.padding.top)
    }
}
