use tracing::debug;

use super::{css_string, parse_color, ColorScheme, Rgba};
use crate::data_types::{ColorMode, ColorOptions, ColorScaleKind};
use crate::error::Result;
use crate::theme::Theme;

/// How a normalized value becomes a color.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Ramp {
    Scheme(ColorScheme),
    Opacity {
        fill: Rgba,
        background: Rgba,
        exponent: f64,
    },
}

/// Maps values in `[min, max]` to colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    ramp: Ramp,
    min: f64,
    max: f64,
    reverse: bool,
}

impl ColorScale {
    /// Fails with `InvalidColorScheme` for an unknown scheme name and with
    /// `InvalidColor` for an unparsable opacity fill. An empty scheme name
    /// selects [`ColorScheme::FALLBACK`].
    pub fn new(options: &ColorOptions, domain: (f64, f64), theme: &Theme) -> Result<Self> {
        let ramp = match options.mode {
            ColorMode::Scheme => {
                let scheme = if options.scheme.is_empty() {
                    ColorScheme::FALLBACK
                } else {
                    options.scheme.parse()?
                };
                Ramp::Scheme(scheme)
            }
            ColorMode::Opacity => {
                let exponent = match options.scale {
                    ColorScaleKind::Linear => 1.0,
                    ColorScaleKind::Exponential => options.exponent,
                };
                Ramp::Opacity {
                    fill: parse_color(&options.fill)?,
                    background: theme.background,
                    exponent,
                }
            }
        };
        debug!(?ramp, min = domain.0, max = domain.1, "built color scale");
        Ok(Self {
            ramp,
            min: domain.0,
            max: domain.1,
            reverse: options.reverse,
        })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Position of `value` in the domain, clamped to `[0, 1]`. A degenerate
    /// domain puts every value in the middle.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() {
            return 0.5;
        }
        let t = ((value - self.min) / span).clamp(0.0, 1.0);
        if self.reverse {
            1.0 - t
        } else {
            t
        }
    }

    pub fn color_of(&self, value: f64) -> Rgba {
        let t = self.normalize(value);
        match self.ramp {
            Ramp::Scheme(scheme) => scheme.interpolate(t),
            Ramp::Opacity {
                fill,
                background,
                exponent,
            } => {
                let alpha = if exponent == 1.0 { t } else { t.powf(exponent) };
                blend(fill, background, alpha)
            }
        }
    }

    pub fn color_string(&self, value: f64) -> String {
        css_string(self.color_of(value))
    }

    /// `steps` colors evenly spaced over the domain, for a legend gradient.
    pub fn stops(&self, steps: u32) -> Vec<Rgba> {
        let steps = steps.max(2);
        (0..steps)
            .map(|i| {
                let f = i as f64 / (steps - 1) as f64;
                self.color_of(self.min + (self.max - self.min) * f)
            })
            .collect()
    }
}

/// `fill` at `alpha` (times its own alpha) over `background`, opaque.
fn blend(fill: Rgba, background: Rgba, alpha: f64) -> Rgba {
    let over = Rgba {
        a: alpha.clamp(0.0, 1.0) as f32 * fill.a,
        ..fill
    };
    Rgba {
        a: 1.0,
        ..background.blend(over)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::to_bytes;
    use crate::error::CarpetError;
    use gpui::rgb;

    fn scheme(name: &str, reverse: bool) -> ColorOptions {
        ColorOptions {
            scheme: name.to_string(),
            reverse,
            ..ColorOptions::default()
        }
    }

    #[test]
    fn test_reverse_mirrors_domain() {
        let theme = Theme::dark();
        let fwd = ColorScale::new(&scheme("Viridis", false), (10.0, 30.0), &theme).unwrap();
        let rev = ColorScale::new(&scheme("Viridis", true), (10.0, 30.0), &theme).unwrap();
        for v in [10.0, 12.5, 20.0, 27.0, 30.0] {
            let (a, b) = (rev.color_of(v), fwd.color_of(30.0 - (v - 10.0)));
            assert!((a.r - b.r).abs() < 1e-6 && (a.g - b.g).abs() < 1e-6 && (a.b - b.b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_domain_is_midpoint() {
        let scale = ColorScale::new(&scheme("Turbo", false), (5.0, 5.0), &Theme::dark()).unwrap();
        assert_eq!(scale.normalize(5.0), 0.5);
        assert_eq!(scale.color_of(-100.0), ColorScheme::Turbo.interpolate(0.5));
    }

    #[test]
    fn test_values_outside_domain_clamp() {
        let scale = ColorScale::new(&scheme("Blues", false), (0.0, 1.0), &Theme::dark()).unwrap();
        assert_eq!(scale.color_of(-3.0), scale.color_of(0.0));
        assert_eq!(scale.color_of(7.0), scale.color_of(1.0));
    }

    #[test]
    fn test_empty_scheme_falls_back() {
        let scale = ColorScale::new(&scheme("", false), (0.0, 1.0), &Theme::dark()).unwrap();
        assert_eq!(scale.color_of(0.3), ColorScheme::FALLBACK.interpolate(0.3));
    }

    #[test]
    fn test_unknown_scheme_fails() {
        let err = ColorScale::new(&scheme("Jet", false), (0.0, 1.0), &Theme::dark()).unwrap_err();
        assert_eq!(err, CarpetError::InvalidColorScheme("Jet".into()));
    }

    #[test]
    fn test_opacity_blends_over_background() {
        let theme = Theme::light();
        let opts = ColorOptions {
            mode: ColorMode::Opacity,
            fill: "#000000".into(),
            ..ColorOptions::default()
        };
        let scale = ColorScale::new(&opts, (0.0, 100.0), &theme).unwrap();
        assert_eq!(to_bytes(scale.color_of(0.0)), [255, 255, 255, 255]);
        assert_eq!(to_bytes(scale.color_of(100.0)), [0, 0, 0, 255]);
        assert_eq!(to_bytes(scale.color_of(50.0)), [128, 128, 128, 255]);
    }

    #[test]
    fn test_exponential_alpha() {
        let opts = ColorOptions {
            mode: ColorMode::Opacity,
            fill: "#ffffff".into(),
            scale: ColorScaleKind::Exponential,
            exponent: 2.0,
            ..ColorOptions::default()
        };
        let theme = Theme {
            background: rgb(0x000000),
            ..Theme::dark()
        };
        let scale = ColorScale::new(&opts, (0.0, 1.0), &theme).unwrap();
        // 0.5^2 = 0.25 of white over black
        assert!((scale.color_of(0.5).r - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_half_transparent_fill_halves_opacity() {
        let opts = ColorOptions {
            mode: ColorMode::Opacity,
            fill: "#ffffff80".into(),
            ..ColorOptions::default()
        };
        let theme = Theme {
            background: rgb(0x000000),
            ..Theme::dark()
        };
        let scale = ColorScale::new(&opts, (0.0, 1.0), &theme).unwrap();
        let top = scale.color_of(1.0);
        // 0x80 / 255 of white over black, and the result is opaque
        assert!((top.r - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(top.a, 1.0);
        assert_eq!(top, rgb(0x000000).blend(parse_color("#ffffff80").unwrap()));
    }

    #[test]
    fn test_legend_stops() {
        let scale = ColorScale::new(&scheme("Greys", false), (0.0, 8.0), &Theme::dark()).unwrap();
        let stops = scale.stops(64);
        assert_eq!(stops.len(), 64);
        assert_eq!(stops[0], scale.color_of(0.0));
        assert_eq!(stops[63], scale.color_of(8.0));
        assert_eq!(scale.stops(0).len(), 2);
    }

    #[test]
    fn test_bad_fill_fails() {
        let opts = ColorOptions {
            mode: ColorMode::Opacity,
            fill: "not-a-color".into(),
            ..ColorOptions::default()
        };
        assert!(matches!(
            ColorScale::new(&opts, (0.0, 1.0), &Theme::dark()),
            Err(CarpetError::InvalidColor(_))
        ));
    }
}
