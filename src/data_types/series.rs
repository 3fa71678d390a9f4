use crate::error::{CarpetError, Result};

/// Absolute time range in UTC milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub from: i64,
    pub to: i64,
}

impl TimeRange {
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    pub fn span(&self) -> i64 {
        self.to - self.from
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Time,
    Number,
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValues {
    /// UTC milliseconds
    Time(Vec<i64>),
    Number(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl FieldValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Time(v) => v.len(),
            Self::Number(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named column of a data frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub display_name: Option<String>,
    pub unit: Option<String>,
    pub values: FieldValues,
}

impl Field {
    pub fn time(name: impl Into<String>, times_ms: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            unit: None,
            values: FieldValues::Time(times_ms),
        }
    }

    pub fn number(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            unit: None,
            values: FieldValues::Number(values),
        }
    }

    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            unit: None,
            values: FieldValues::Text(values),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn kind(&self) -> FieldKind {
        match self.values {
            FieldValues::Time(_) => FieldKind::Time,
            FieldValues::Number(_) => FieldKind::Number,
            FieldValues::Text(_) => FieldKind::Other,
        }
    }
}

/// A set of equally long fields, as delivered by the host data source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub fields: Vec<Field>,
}

impl Frame {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn first_of_kind(&self, kind: FieldKind) -> Option<&Field> {
        self.fields.iter().find(|f| f.kind() == kind)
    }

    /// Picks the time and value fields, by name when given, else the first
    /// field of the matching kind.
    pub fn select_series(
        &self,
        time_field_name: Option<&str>,
        value_field_name: Option<&str>,
    ) -> Result<TimeSeries> {
        let time_field = match time_field_name.filter(|n| !n.is_empty()) {
            Some(name) => self.field(name),
            None => self.first_of_kind(FieldKind::Time),
        };
        let value_field = match value_field_name.filter(|n| !n.is_empty()) {
            Some(name) => self.field(name),
            None => self.first_of_kind(FieldKind::Number),
        };

        let (Some(time_field), Some(value_field)) = (time_field, value_field) else {
            return Err(CarpetError::MissingField {
                needs_time: time_field.is_none(),
                needs_number: value_field.is_none(),
            });
        };

        let FieldValues::Time(times) = &time_field.values else {
            return Err(CarpetError::MissingField {
                needs_time: true,
                needs_number: false,
            });
        };
        let FieldValues::Number(values) = &value_field.values else {
            return Err(CarpetError::MissingField {
                needs_time: false,
                needs_number: true,
            });
        };

        let mut series = TimeSeries::new(times.clone(), values.clone())?;
        series.name = value_field.name.clone();
        series.display_name = value_field.display_name.clone();
        series.unit = value_field.unit.clone();
        Ok(series)
    }
}

/// Selects the series from the first frame of a panel's data.
pub fn select_first_series(
    frames: &[Frame],
    time_field_name: Option<&str>,
    value_field_name: Option<&str>,
) -> Result<TimeSeries> {
    let frame = frames.first().ok_or(CarpetError::NoSeries)?;
    frame.select_series(time_field_name, value_field_name)
}

/// Parallel timestamps and values, ordered non-decreasing by timestamp.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    pub name: String,
    pub display_name: Option<String>,
    pub unit: Option<String>,
    /// UTC milliseconds
    pub times_ms: Vec<i64>,
    pub values: Vec<Option<f64>>,
}

impl TimeSeries {
    pub fn new(times_ms: Vec<i64>, values: Vec<Option<f64>>) -> Result<Self> {
        if times_ms.len() != values.len() {
            return Err(CarpetError::LengthMismatch {
                times: times_ms.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            name: String::from("value"),
            display_name: None,
            unit: None,
            times_ms,
            values,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn len(&self) -> usize {
        self.times_ms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times_ms.is_empty()
    }

    /// Label shown in tooltips.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Min and max of the non-null, finite values.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self.values.iter().flatten() {
            if v.is_finite() {
                min = min.min(*v);
                max = max.max(*v);
            }
        }
        if min == f64::INFINITY {
            None
        } else {
            Some((min, max))
        }
    }
}
