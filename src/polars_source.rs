#![cfg(feature = "polars")]

use polars::prelude::*;
use tracing::debug;

use crate::data_types::{Field, Frame};

/// Converts a polars `DataFrame` into a [`Frame`].
///
/// `Datetime` and `Date` columns become time fields (UTC milliseconds),
/// integer and float columns number fields, anything else text. Null
/// timestamps are rejected since a sample without a time has no cell.
pub fn frame_from_dataframe(df: &DataFrame) -> PolarsResult<Frame> {
    let mut fields = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let name = column.name().to_string();
        let series = column.as_materialized_series();
        let field = match series.dtype() {
            DataType::Datetime(_, _) | DataType::Date => {
                Field::time(name.clone(), timestamps_ms(series, &name)?)
            }
            dtype if is_number(dtype) => {
                let values = series.cast(&DataType::Float64)?;
                Field::number(name, values.f64()?.into_iter().collect())
            }
            _ => {
                let text = series.cast(&DataType::String)?;
                Field::text(
                    name,
                    text.str()?.into_iter().map(|v| v.map(str::to_string)).collect(),
                )
            }
        };
        fields.push(field);
    }
    debug!(columns = fields.len(), rows = df.height(), "converted data frame");
    Ok(Frame::new(fields))
}

fn is_number(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

fn timestamps_ms(series: &Series, name: &str) -> PolarsResult<Vec<i64>> {
    let as_ms = series.cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
    let raw = as_ms.cast(&DataType::Int64)?;
    raw.i64()?
        .into_iter()
        .map(|v| {
            v.ok_or_else(|| {
                PolarsError::ComputeError(format!("null timestamp in column {name}").into())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::{FieldKind, FieldValues};

    #[test]
    fn test_kinds() {
        let df = df!(
            "ts" => &[0i64, 60_000, 120_000],
            "power" => &[Some(1.5), None, Some(3.0)],
            "site" => &["a", "b", "c"]
        )
        .unwrap();
        let df = df
            .lazy()
            .with_column(col("ts").cast(DataType::Datetime(TimeUnit::Milliseconds, None)))
            .collect()
            .unwrap();

        let frame = frame_from_dataframe(&df).unwrap();
        let kinds: Vec<FieldKind> = frame.fields.iter().map(|f| f.kind()).collect();
        assert_eq!(kinds, vec![FieldKind::Time, FieldKind::Number, FieldKind::Other]);
        assert_eq!(frame.fields[0].values, FieldValues::Time(vec![0, 60_000, 120_000]));
        assert_eq!(
            frame.fields[1].values,
            FieldValues::Number(vec![Some(1.5), None, Some(3.0)])
        );
    }
}
