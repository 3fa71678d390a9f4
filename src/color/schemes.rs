//! Built-in continuous color schemes.
//!
//! The ColorBrewer schemes are B-spline ramps through their largest class
//! set, Turbo/Cividis/Sinebow/Rainbow/Warm/Cool/Cubehelix are closed-form, and
//! the matplotlib family (Viridis, Magma, Inferno, Plasma) is a piecewise
//! linear ramp through eleven reference stops.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use gpui::rgb;

use super::{from_channels, Rgba};
use crate::error::CarpetError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemeFamily {
    Diverging,
    Sequential,
    Cyclical,
}

macro_rules! schemes {
    ($($variant:ident => $name:literal, $family:ident;)*) => {
        /// Named color scheme.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ColorScheme {
            $(#[serde(rename = $name)] $variant,)*
        }

        impl ColorScheme {
            /// Every scheme, in the order the options editor lists them.
            pub const ALL: &'static [ColorScheme] = &[$(ColorScheme::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(ColorScheme::$variant => $name,)*
                }
            }

            pub fn family(self) -> SchemeFamily {
                match self {
                    $(ColorScheme::$variant => SchemeFamily::$family,)*
                }
            }
        }

        impl FromStr for ColorScheme {
            type Err = CarpetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(ColorScheme::$variant),)*
                    other => Err(CarpetError::InvalidColorScheme(other.to_string())),
                }
            }
        }
    };
}

schemes! {
    BrBG => "BrBG", Diverging;
    PiYG => "PiYG", Diverging;
    PRGn => "PRGn", Diverging;
    PuOr => "PuOr", Diverging;
    RdBu => "RdBu", Diverging;
    RdGy => "RdGy", Diverging;
    RdYlBu => "RdYlBu", Diverging;
    RdYlGn => "RdYlGn", Diverging;
    Spectral => "Spectral", Diverging;

    Blues => "Blues", Sequential;
    Greens => "Greens", Sequential;
    Greys => "Greys", Sequential;
    Oranges => "Oranges", Sequential;
    Purples => "Purples", Sequential;
    Reds => "Reds", Sequential;

    Turbo => "Turbo", Sequential;
    Cividis => "Cividis", Sequential;
    Viridis => "Viridis", Sequential;
    Magma => "Magma", Sequential;
    Inferno => "Inferno", Sequential;
    Plasma => "Plasma", Sequential;
    Warm => "Warm", Sequential;
    Cool => "Cool", Sequential;
    CubehelixDefault => "CubehelixDefault", Sequential;
    BuGn => "BuGn", Sequential;
    BuPu => "BuPu", Sequential;
    GnBu => "GnBu", Sequential;
    OrRd => "OrRd", Sequential;
    PuBuGn => "PuBuGn", Sequential;
    PuBu => "PuBu", Sequential;
    PuRd => "PuRd", Sequential;
    RdPu => "RdPu", Sequential;
    YlGnBu => "YlGnBu", Sequential;
    YlGn => "YlGn", Sequential;
    YlOrBr => "YlOrBr", Sequential;
    YlOrRd => "YlOrRd", Sequential;

    Rainbow => "Rainbow", Cyclical;
    Sinebow => "Sinebow", Cyclical;
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ColorScheme {
    /// Scheme used when none is configured.
    pub const FALLBACK: ColorScheme = ColorScheme::Spectral;

    /// Color at `t` in `[0, 1]`; values outside are clamped (cyclical
    /// schemes wrap instead).
    pub fn interpolate(self, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t };
        match self {
            Self::Turbo => turbo(t),
            Self::Cividis => cividis(t),
            Self::Sinebow => sinebow(t),
            Self::Rainbow => rainbow(t),
            Self::Warm => cubehelix_long((-100.0, 0.75, 0.35), (80.0, 1.5, 0.8), t),
            Self::Cool => cubehelix_long((260.0, 0.75, 0.35), (80.0, 1.5, 0.8), t),
            Self::CubehelixDefault => cubehelix_long((300.0, 0.5, 0.0), (-240.0, 0.5, 1.0), t),
            Self::Viridis => linear_ramp(&VIRIDIS, t),
            Self::Magma => linear_ramp(&MAGMA, t),
            Self::Inferno => linear_ramp(&INFERNO, t),
            Self::Plasma => linear_ramp(&PLASMA, t),
            other => basis_ramp(brewer(other), t),
        }
    }
}

fn brewer(scheme: ColorScheme) -> &'static [u32] {
    use ColorScheme::*;
    match scheme {
        BrBG => &BRBG,
        PiYG => &PIYG,
        PRGn => &PRGN,
        PuOr => &PUOR,
        RdBu => &RDBU,
        RdGy => &RDGY,
        RdYlBu => &RDYLBU,
        RdYlGn => &RDYLGN,
        Spectral => &SPECTRAL,
        Blues => &BLUES,
        Greens => &GREENS,
        Greys => &GREYS,
        Oranges => &ORANGES,
        Purples => &PURPLES,
        Reds => &REDS,
        BuGn => &BUGN,
        BuPu => &BUPU,
        GnBu => &GNBU,
        OrRd => &ORRD,
        PuBuGn => &PUBUGN,
        PuBu => &PUBU,
        PuRd => &PURD,
        RdPu => &RDPU,
        YlGnBu => &YLGNBU,
        YlGn => &YLGN,
        YlOrBr => &YLORBR,
        YlOrRd => &YLORRD,
        _ => &GREYS,
    }
}

/// Uniform cubic B-spline through `colors`, per channel.
fn basis_ramp(colors: &[u32], t: f64) -> Rgba {
    let channels: Vec<Rgba> = colors.iter().map(|c| rgb(*c)).collect();
    let n = channels.len() - 1;
    let t = t.clamp(0.0, 1.0);
    let i = if t >= 1.0 { n - 1 } else { (t * n as f64).floor() as usize };
    let local = (t - i as f64 / n as f64) * n as f64;

    let channel = |f: fn(&Rgba) -> f32| {
        let v = |k: usize| f(&channels[k]) as f64 * 255.0;
        let (v1, v2) = (v(i), v(i + 1));
        let v0 = if i > 0 { v(i - 1) } else { 2.0 * v1 - v2 };
        let v3 = if i < n - 1 { v(i + 2) } else { 2.0 * v2 - v1 };
        basis(local, v0, v1, v2, v3)
    };

    from_channels(channel(|c| c.r), channel(|c| c.g), channel(|c| c.b))
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

fn linear_ramp(stops: &[u32], t: f64) -> Rgba {
    let n = stops.len() - 1;
    let pos = t.clamp(0.0, 1.0) * n as f64;
    let i = (pos.floor() as usize).min(n - 1);
    let next = Rgba {
        a: (pos - i as f64) as f32,
        ..rgb(stops[i + 1])
    };
    rgb(stops[i]).blend(next)
}

fn poly_channel(v: f64) -> f64 {
    v.round().clamp(0.0, 255.0)
}

fn turbo(t: f64) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    from_channels(
        poly_channel(34.61 + t * (1172.33 - t * (10793.56 - t * (33300.12 - t * (38394.49 - t * 14825.05))))),
        poly_channel(23.31 + t * (557.33 + t * (1225.33 - t * (3574.96 - t * (1073.77 + t * 707.56))))),
        poly_channel(27.2 + t * (3211.1 - t * (15327.97 - t * (27814.0 - t * (22569.18 - t * 6838.66))))),
    )
}

fn cividis(t: f64) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    from_channels(
        poly_channel(-4.54 - t * (35.34 - t * (2381.73 - t * (6402.7 - t * (7024.72 - t * 2710.57))))),
        poly_channel(32.49 + t * (170.73 + t * (52.82 - t * (131.46 - t * (176.58 - t * 67.37))))),
        poly_channel(81.24 + t * (442.36 - t * (2482.43 - t * (6167.24 - t * (6614.94 - t * 2475.67))))),
    )
}

fn sinebow(t: f64) -> Rgba {
    let t = (0.5 - t) * PI;
    let sq = |x: f64| {
        let s = x.sin();
        255.0 * s * s
    };
    from_channels(sq(t), sq(t + PI / 3.0), sq(t + 2.0 * PI / 3.0))
}

fn rainbow(t: f64) -> Rgba {
    let t = if !(0.0..=1.0).contains(&t) { t - t.floor() } else { t };
    let ts = (t - 0.5).abs();
    cubehelix(360.0 * t - 100.0, 1.5 - 1.5 * ts, 0.8 - 0.9 * ts)
}

/// Cubehelix interpolation with linear hue (no shortest-arc wrapping).
fn cubehelix_long(from: (f64, f64, f64), to: (f64, f64, f64), t: f64) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    cubehelix(
        from.0 + (to.0 - from.0) * t,
        from.1 + (to.1 - from.1) * t,
        from.2 + (to.2 - from.2) * t,
    )
}

/// Green's cubehelix color (hue in degrees) to RGB.
fn cubehelix(h: f64, s: f64, l: f64) -> Rgba {
    const A: f64 = -0.14861;
    const B: f64 = 1.78277;
    const C: f64 = -0.29227;
    const D: f64 = -0.90649;
    const E: f64 = 1.97294;

    let h = (h + 120.0).to_radians();
    let a = s * l * (1.0 - l);
    let (sinh, cosh) = h.sin_cos();
    from_channels(
        255.0 * (l + a * (A * cosh + B * sinh)),
        255.0 * (l + a * (C * cosh + D * sinh)),
        255.0 * (l + a * (E * cosh)),
    )
}

const BRBG: [u32; 11] = [
    0x543005, 0x8c510a, 0xbf812d, 0xdfc27d, 0xf6e8c3, 0xf5f5f5, 0xc7eae5, 0x80cdc1, 0x35978f,
    0x01665e, 0x003c30,
];
const PIYG: [u32; 11] = [
    0x8e0152, 0xc51b7d, 0xde77ae, 0xf1b6da, 0xfde0ef, 0xf7f7f7, 0xe6f5d0, 0xb8e186, 0x7fbc41,
    0x4d9221, 0x276419,
];
const PRGN: [u32; 11] = [
    0x40004b, 0x762a83, 0x9970ab, 0xc2a5cf, 0xe7d4e8, 0xf7f7f7, 0xd9f0d3, 0xa6dba0, 0x5aae61,
    0x1b7837, 0x00441b,
];
const PUOR: [u32; 11] = [
    0x2d004b, 0x542788, 0x8073ac, 0xb2abd2, 0xd8daeb, 0xf7f7f7, 0xfee0b6, 0xfdb863, 0xe08214,
    0xb35806, 0x7f3b08,
];
const RDBU: [u32; 11] = [
    0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x92c5de, 0x4393c3,
    0x2166ac, 0x053061,
];
const RDGY: [u32; 11] = [
    0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xffffff, 0xe0e0e0, 0xbababa, 0x878787,
    0x4d4d4d, 0x1a1a1a,
];
const RDYLBU: [u32; 11] = [
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee090, 0xffffbf, 0xe0f3f8, 0xabd9e9, 0x74add1,
    0x4575b4, 0x313695,
];
const RDYLGN: [u32; 11] = [
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xd9ef8b, 0xa6d96a, 0x66bd63,
    0x1a9850, 0x006837,
];
const SPECTRAL: [u32; 11] = [
    0x9e0142, 0xd53e4f, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xe6f598, 0xabdda4, 0x66c2a5,
    0x3288bd, 0x5e4fa2,
];

const BLUES: [u32; 9] = [
    0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b,
];
const GREENS: [u32; 9] = [
    0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b,
];
const GREYS: [u32; 9] = [
    0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000,
];
const ORANGES: [u32; 9] = [
    0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0xa63603, 0x7f2704,
];
const PURPLES: [u32; 9] = [
    0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x54278f, 0x3f007d,
];
const REDS: [u32; 9] = [
    0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d,
];
const BUGN: [u32; 9] = [
    0xf7fcfd, 0xe5f5f9, 0xccece6, 0x99d8c9, 0x66c2a4, 0x41ae76, 0x238b45, 0x006d2c, 0x00441b,
];
const BUPU: [u32; 9] = [
    0xf7fcfd, 0xe0ecf4, 0xbfd3e6, 0x9ebcda, 0x8c96c6, 0x8c6bb1, 0x88419d, 0x810f7c, 0x4d004b,
];
const GNBU: [u32; 9] = [
    0xf7fcf0, 0xe0f3db, 0xccebc5, 0xa8ddb5, 0x7bccc4, 0x4eb3d3, 0x2b8cbe, 0x0868ac, 0x084081,
];
const ORRD: [u32; 9] = [
    0xfff7ec, 0xfee8c8, 0xfdd49e, 0xfdbb84, 0xfc8d59, 0xef6548, 0xd7301f, 0xb30000, 0x7f0000,
];
const PUBUGN: [u32; 9] = [
    0xfff7fb, 0xece2f0, 0xd0d1e6, 0xa6bddb, 0x67a9cf, 0x3690c0, 0x02818a, 0x016c59, 0x014636,
];
const PUBU: [u32; 9] = [
    0xfff7fb, 0xece7f2, 0xd0d1e6, 0xa6bddb, 0x74a9cf, 0x3690c0, 0x0570b0, 0x045a8d, 0x023858,
];
const PURD: [u32; 9] = [
    0xf7f4f9, 0xe7e1ef, 0xd4b9da, 0xc994c7, 0xdf65b0, 0xe7298a, 0xce1256, 0x980043, 0x67001f,
];
const RDPU: [u32; 9] = [
    0xfff7f3, 0xfde0dd, 0xfcc5c0, 0xfa9fb5, 0xf768a1, 0xdd3497, 0xae017e, 0x7a0177, 0x49006a,
];
const YLGNBU: [u32; 9] = [
    0xffffd9, 0xedf8b1, 0xc7e9b4, 0x7fcdbb, 0x41b6c4, 0x1d91c0, 0x225ea8, 0x253494, 0x081d58,
];
const YLGN: [u32; 9] = [
    0xffffe5, 0xf7fcb9, 0xd9f0a3, 0xaddd8e, 0x78c679, 0x41ab5d, 0x238443, 0x006837, 0x004529,
];
const YLORBR: [u32; 9] = [
    0xffffe5, 0xfff7bc, 0xfee391, 0xfec44f, 0xfe9929, 0xec7014, 0xcc4c02, 0x993404, 0x662506,
];
const YLORRD: [u32; 9] = [
    0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a, 0xe31a1c, 0xbd0026, 0x800026,
];

const VIRIDIS: [u32; 11] = [
    0x440154, 0x482475, 0x414487, 0x355f8d, 0x2a788e, 0x21918c, 0x22a884, 0x44bf70, 0x7ad151,
    0xbddf26, 0xfde725,
];
const MAGMA: [u32; 11] = [
    0x000004, 0x140e36, 0x3b0f70, 0x641a80, 0x8c2981, 0xb73779, 0xde4968, 0xf7705c, 0xfe9f6d,
    0xfecf92, 0xfcfdbf,
];
const INFERNO: [u32; 11] = [
    0x000004, 0x160b39, 0x420a68, 0x6a176e, 0x932667, 0xbc3754, 0xdd513a, 0xf37819, 0xfca50a,
    0xf6d746, 0xfcffa4,
];
const PLASMA: [u32; 11] = [
    0x0d0887, 0x41049d, 0x6a00a8, 0x8f0da4, 0xb12a90, 0xcc4778, 0xe16462, 0xf2844b, 0xfca636,
    0xfcce25, 0xf0f921,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::to_bytes;

    #[test]
    fn test_registry_round_trips_names() {
        assert_eq!(ColorScheme::ALL.len(), 38);
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.name().parse::<ColorScheme>().unwrap(), *scheme);
        }
        assert_eq!(ColorScheme::ALL[0], ColorScheme::BrBG);
    }

    #[test]
    fn test_unknown_scheme() {
        assert_eq!(
            "Mauve".parse::<ColorScheme>(),
            Err(CarpetError::InvalidColorScheme("Mauve".into()))
        );
        // names are case sensitive
        assert!("spectral".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_ramp_end_points() {
        assert_eq!(to_bytes(ColorScheme::Greys.interpolate(0.0)), [255, 255, 255, 255]);
        assert_eq!(to_bytes(ColorScheme::Greys.interpolate(1.0)), [0, 0, 0, 255]);
        assert_eq!(ColorScheme::Viridis.interpolate(0.0), rgb(0x440154));
        assert_eq!(ColorScheme::Viridis.interpolate(1.0), rgb(0xfde725));
        assert_eq!(to_bytes(ColorScheme::Turbo.interpolate(0.0)), [35, 23, 27, 255]);
        // clamped
        assert_eq!(ColorScheme::Blues.interpolate(-3.0), ColorScheme::Blues.interpolate(0.0));
    }

    #[test]
    fn test_channels_in_gamut() {
        for scheme in ColorScheme::ALL {
            for i in 0..=20 {
                let c = scheme.interpolate(i as f64 / 20.0);
                assert_eq!(c.a, 1.0, "{scheme} at {i}");
                assert!([c.r, c.g, c.b].iter().all(|v| (0.0..=1.0).contains(v)), "{scheme} at {i}");
            }
        }
    }

    #[test]
    fn test_diverging_midpoint_is_light() {
        let [r, g, b, _] = to_bytes(ColorScheme::RdBu.interpolate(0.5));
        assert!(r > 230 && g > 230 && b > 230);
    }

    #[test]
    fn test_families() {
        assert_eq!(ColorScheme::Spectral.family(), SchemeFamily::Diverging);
        assert_eq!(ColorScheme::Viridis.family(), SchemeFamily::Sequential);
        assert_eq!(ColorScheme::Sinebow.family(), SchemeFamily::Cyclical);
    }
}
