use gpui::{rgb, Rgba};

/// Colors and font sizes the plot is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub is_dark: bool,
    pub background: Rgba,
    pub text: Rgba,
    pub grid_line: Rgba,
    /// Fill of the hover/selection frames.
    pub highlight: Rgba,
    pub axis_font_size: f64,
    pub font_size: f64,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            background: rgb(0x181b1f),
            text: rgb(0xccccdc),
            grid_line: Rgba { a: 0.5, ..rgb(0x787882) },
            highlight: Rgba { a: 0.2, ..rgb(0x787882) },
            axis_font_size: 12.0,
            font_size: 14.0,
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark: false,
            background: rgb(0xffffff),
            text: rgb(0x24292e),
            ..Self::dark()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
