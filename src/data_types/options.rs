use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Alpha-blend a fixed fill color over the background.
    Opacity,
    /// Continuous interpolation through a named scheme.
    #[default]
    Scheme,
}

/// Shape of the alpha ramp in opacity mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScaleKind {
    Exponential,
    #[default]
    Linear,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorOptions {
    pub mode: ColorMode,
    /// Fill color in opacity mode (named color or CSS color).
    pub fill: String,
    pub scale: ColorScaleKind,
    /// Exponent of the alpha ramp when `scale` is exponential.
    pub exponent: f64,
    pub reverse: bool,
    /// Scheme name; an empty string selects the fallback scheme.
    pub scheme: String,
    /// Start of the color domain; data minimum when unset.
    pub min: Option<f64>,
    /// End of the color domain; data maximum when unset.
    pub max: Option<f64>,
    pub steps: u32,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            mode: ColorMode::Scheme,
            fill: String::from("green"),
            scale: ColorScaleKind::Linear,
            exponent: 1.0,
            reverse: false,
            scheme: String::from("BrBG"),
            min: None,
            max: None,
            steps: 64,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValueFieldOptions {
    pub name: Option<String>,
    pub unit: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxesOptions {
    pub show_x: bool,
    pub show_y: bool,
}

impl Default for AxesOptions {
    fn default() -> Self {
        Self {
            show_x: true,
            show_y: false,
        }
    }
}

/// Panel options, in the shape of the panel's JSON model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarpetOptions {
    pub time_field_name: Option<String>,
    pub value_field: ValueFieldOptions,
    /// Stroke width drawn between cells, in pixels.
    pub gap_width: f32,
    pub axes: AxesOptions,
    pub color: ColorOptions,
}

impl CarpetOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("failed to parse carpet panel options")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize carpet panel options")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let opts = CarpetOptions::from_json("{}").unwrap();
        assert_eq!(opts, CarpetOptions::default());
        assert!(opts.axes.show_x);
        assert!(!opts.axes.show_y);
        assert_eq!(opts.color.mode, ColorMode::Scheme);
        assert_eq!(opts.color.fill, "green");
        assert_eq!(opts.gap_width, 0.0);
    }

    #[test]
    fn test_panel_json() {
        let json = r##"{
            "timeFieldName": "time",
            "valueField": { "name": "power", "unit": "watt" },
            "gapWidth": 1.5,
            "axes": { "showY": true },
            "color": { "mode": "opacity", "fill": "#ff0000", "scale": "exponential", "exponent": 0.5, "reverse": true, "max": 100 }
        }"##;
        let opts = CarpetOptions::from_json(json).unwrap();
        assert_eq!(opts.color.fill, "#ff0000");
        assert_eq!(opts.time_field_name.as_deref(), Some("time"));
        assert_eq!(opts.value_field.unit.as_deref(), Some("watt"));
        assert!(opts.axes.show_x);
        assert!(opts.axes.show_y);
        assert_eq!(opts.color.mode, ColorMode::Opacity);
        assert_eq!(opts.color.scale, ColorScaleKind::Exponential);
        assert_eq!(opts.color.exponent, 0.5);
        assert_eq!(opts.color.min, None);
        assert_eq!(opts.color.max, Some(100.0));
    }

    #[test]
    fn test_bad_json_has_context() {
        let err = CarpetOptions::from_json(r#"{"color": {"mode": "rainbow"}}"#).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse carpet panel options"));
    }
}
