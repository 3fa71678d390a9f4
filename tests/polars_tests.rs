#[cfg(feature = "polars")]
use carpet_plot::data_types::TimeRange;
#[cfg(feature = "polars")]
use carpet_plot::polars_source::frame_from_dataframe;
#[cfg(feature = "polars")]
use carpet_plot::{CarpetOptions, CarpetPlot, Theme};
#[cfg(feature = "polars")]
use polars::prelude::*;

#[cfg(feature = "polars")]
const HOUR: i64 = 3_600_000;

#[test]
#[cfg(feature = "polars")]
fn test_dataframe_to_scene() {
    let times: Vec<i64> = (0..48).map(|i| i * HOUR).collect();
    let load: Vec<Option<i32>> = (0..48).map(|i| if i == 5 { None } else { Some(i % 24) }).collect();
    let df = DataFrame::new(vec![
        Series::new("ts".into(), times.clone()).into(),
        Series::new("load".into(), load).into(),
    ])
    .unwrap()
    .lazy()
    .with_column(
        col("ts")
            .cast(DataType::Datetime(TimeUnit::Milliseconds, None))
            .cast(DataType::Datetime(TimeUnit::Microseconds, None)),
    )
    .collect()
    .unwrap();

    let frame = frame_from_dataframe(&df).unwrap();
    let plot = CarpetPlot::from_frames(&[frame], CarpetOptions::default(), Theme::dark()).unwrap();
    assert_eq!(plot.series().times_ms, times);
    assert_eq!(plot.series().values[5], None);
    assert_eq!(plot.series().values[30], Some(6.0));

    let scene = plot
        .scene(500.0, 300.0, TimeRange::new(0, 47 * HOUR), chrono_tz::Tz::UTC)
        .unwrap();
    assert_eq!(scene.cells.len(), 47);
}

#[test]
#[cfg(feature = "polars")]
fn test_null_timestamp_is_an_error() {
    let df = DataFrame::new(vec![
        Series::new("ts".into(), vec![Some(0i64), None]).into(),
        Series::new("v".into(), vec![1.0, 2.0]).into(),
    ])
    .unwrap()
    .lazy()
    .with_column(col("ts").cast(DataType::Datetime(TimeUnit::Milliseconds, None)))
    .collect()
    .unwrap();
    assert!(frame_from_dataframe(&df).is_err());
}
