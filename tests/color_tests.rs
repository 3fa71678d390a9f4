use carpet_plot::color::{css_string, parse_color, to_bytes, ColorScale, ColorScheme, Rgba, SchemeFamily};
use carpet_plot::data_types::{ColorMode, ColorOptions};
use carpet_plot::{CarpetError, Theme};

fn close(a: Rgba, b: Rgba) -> bool {
    (a.r - b.r).abs() < 1e-6 && (a.g - b.g).abs() < 1e-6 && (a.b - b.b).abs() < 1e-6
}

#[test]
fn test_reverse_mirrors_every_scheme() {
    let theme = Theme::dark();
    let (min, max) = (-20.0, 80.0);
    for scheme in ColorScheme::ALL {
        let mut options = ColorOptions {
            scheme: scheme.name().to_string(),
            ..ColorOptions::default()
        };
        let forward = ColorScale::new(&options, (min, max), &theme).unwrap();
        options.reverse = true;
        let reversed = ColorScale::new(&options, (min, max), &theme).unwrap();

        for i in 0..=10 {
            let v = min + (max - min) * i as f64 / 10.0;
            assert!(
                close(reversed.color_of(v), forward.color_of(max - (v - min))),
                "{scheme} at {v}"
            );
        }
    }
}

#[test]
fn test_sequential_schemes_change_monotonically_in_lightness() {
    // single-hue ramps run from light to dark
    for scheme in [ColorScheme::Blues, ColorScheme::Greens, ColorScheme::Greys, ColorScheme::Reds] {
        assert_eq!(scheme.family(), SchemeFamily::Sequential);
        let luma = |t: f64| {
            let c = scheme.interpolate(t);
            0.299 * c.r + 0.587 * c.g + 0.114 * c.b
        };
        for i in 0..10 {
            let (a, b) = (i as f64 / 10.0, (i + 1) as f64 / 10.0);
            assert!(luma(a) > luma(b), "{scheme} between {a} and {b}");
        }
    }
}

#[test]
fn test_cyclical_schemes_wrap() {
    let start = to_bytes(ColorScheme::Sinebow.interpolate(0.0));
    let end = to_bytes(ColorScheme::Sinebow.interpolate(1.0));
    assert_eq!(start, end);
}

#[test]
fn test_opacity_over_dark_background() {
    let theme = Theme::dark();
    let options = ColorOptions {
        mode: ColorMode::Opacity,
        fill: "red".into(),
        ..ColorOptions::default()
    };
    let scale = ColorScale::new(&options, (0.0, 10.0), &theme).unwrap();
    assert_eq!(scale.color_of(0.0), theme.background);
    assert_eq!(scale.color_string(10.0), "rgb(242, 73, 92)");
}

#[test]
fn test_named_fill_at_partial_opacity() {
    let theme = Theme::light();
    let options = ColorOptions {
        mode: ColorMode::Opacity,
        fill: "dark-blue".into(),
        ..ColorOptions::default()
    };
    let scale = ColorScale::new(&options, (0.0, 4.0), &theme).unwrap();
    let fill = parse_color("#1f60c4").unwrap();
    let expected = theme.background.blend(Rgba { a: 0.25, ..fill });
    assert_eq!(scale.color_of(1.0), expected);
    assert_eq!(css_string(scale.color_of(1.0)), css_string(expected));
    assert_eq!(to_bytes(scale.color_of(1.0))[3], 255);
}

#[test]
fn test_configuration_errors() {
    let theme = Theme::light();
    let unknown = ColorOptions {
        scheme: "Parula".into(),
        ..ColorOptions::default()
    };
    assert_eq!(
        ColorScale::new(&unknown, (0.0, 1.0), &theme),
        Err(CarpetError::InvalidColorScheme("Parula".into()))
    );

    // the fill is ignored in scheme mode
    let scheme_mode = ColorOptions {
        fill: "???".into(),
        ..ColorOptions::default()
    };
    assert!(ColorScale::new(&scheme_mode, (0.0, 1.0), &theme).is_ok());
}
