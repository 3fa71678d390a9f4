//! Colors, named schemes and the value-to-color scale.

mod scale;
mod schemes;

pub use scale::ColorScale;
pub use schemes::{ColorScheme, SchemeFamily};

pub use gpui::Rgba;

use gpui::rgb;

use crate::error::{CarpetError, Result};

/// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` or a named dashboard color
/// (case insensitive).
pub fn parse_color(input: &str) -> Result<Rgba> {
    let s = input.trim();
    let color = if s.starts_with('#') {
        Rgba::try_from(s).ok()
    } else {
        named_color(&s.to_ascii_lowercase())
    };
    color.ok_or_else(|| CarpetError::InvalidColor(input.to_string()))
}

/// Channels as bytes, rounded the way CSS serializes them.
pub fn to_bytes(color: Rgba) -> [u8; 4] {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [c(color.r), c(color.g), c(color.b), c(color.a)]
}

/// `rgb(r, g, b)`, or `rgba(r, g, b, a)` when not opaque.
pub fn css_string(color: Rgba) -> String {
    let [r, g, b, _] = to_bytes(color);
    if color.a >= 1.0 {
        format!("rgb({}, {}, {})", r, g, b)
    } else {
        let a = (color.a.clamp(0.0, 1.0) as f64 * 1000.0).round() / 1000.0;
        format!("rgba({}, {}, {}, {})", r, g, b, a)
    }
}

/// Opaque color from 0..=255 channels; out-of-gamut values are clamped.
pub(crate) fn from_channels(r: f64, g: f64, b: f64) -> Rgba {
    let c = |v: f64| (v.clamp(0.0, 255.0) / 255.0) as f32;
    Rgba {
        r: c(r),
        g: c(g),
        b: c(b),
        a: 1.0,
    }
}

/// Named visualization colors of the dashboard palette.
fn named_color(name: &str) -> Option<Rgba> {
    let hex = match name {
        "transparent" => return Some(Rgba::default()),
        "white" => 0xffffff,
        "black" => 0x000000,

        "dark-red" => 0xc4162a,
        "semi-dark-red" => 0xe02f44,
        "red" => 0xf2495c,
        "light-red" => 0xff7383,
        "super-light-red" => 0xffa6b0,

        "dark-orange" => 0xfa6400,
        "semi-dark-orange" => 0xff780a,
        "orange" => 0xff9830,
        "light-orange" => 0xffb357,
        "super-light-orange" => 0xffcb7d,

        "dark-yellow" => 0xe0b400,
        "semi-dark-yellow" => 0xf2cc0c,
        "yellow" => 0xfade2a,
        "light-yellow" => 0xffee52,
        "super-light-yellow" => 0xfff899,

        "dark-green" => 0x37872d,
        "semi-dark-green" => 0x56a64b,
        "green" => 0x73bf69,
        "light-green" => 0x96d98d,
        "super-light-green" => 0xc8f2c2,

        "dark-blue" => 0x1f60c4,
        "semi-dark-blue" => 0x3274d9,
        "blue" => 0x5794f2,
        "light-blue" => 0x8ab8ff,
        "super-light-blue" => 0xc0d8ff,

        "dark-purple" => 0x8f3bb8,
        "semi-dark-purple" => 0xa352cc,
        "purple" => 0xb877d9,
        "light-purple" => 0xca95e5,
        "super-light-purple" => 0xdeb6f2,

        _ => return None,
    };
    Some(rgb(hex))
}
