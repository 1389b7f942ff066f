//! Tests for edge cases and error handling

mod common;

use polars::prelude::*;
use region_polars::{
    AxisPair, BinningMode, Error, GridConfig, OutOfRangePolicy, RegionDynamicsExt,
};
use common::{air_quality_df, u64_values};

#[test]
fn test_invalid_column_error() {
    let df = air_quality_df();
    let result = df.region_dynamics(&AxisPair::new("Ozone", "nonexistent"), &GridConfig::default());
    assert!(matches!(result, Err(Error::InvalidColumn(name)) if name == "nonexistent"));
}

#[test]
fn test_non_numeric_column_error() {
    let df = air_quality_df();
    let result = df.region_density(
        &AxisPair::new("Month", "Wind"),
        &GridConfig::default(),
        BinningMode::Absolute,
    );
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_empty_data() {
    let df = DataFrame::new(vec![
        Series::new(PlSmallStr::from("x"), Vec::<f64>::new()).into(),
        Series::new(PlSmallStr::from("y"), Vec::<f64>::new()).into(),
    ])
    .unwrap();

    let result = df.region_dynamics(&AxisPair::new("x", "y"), &GridConfig::default());
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_all_rows_incomplete() {
    let df = df![
        "x" => [Some(1.0), None, Some(f64::NAN)],
        "y" => [None, Some(2.0), Some(3.0)],
    ]
    .unwrap();

    let scatter = df.region_points(&AxisPair::new("x", "y"), None).unwrap();
    assert!(scatter.points.is_empty());
    assert_eq!(scatter.dropped, 3);

    let result = df.region_density(&AxisPair::new("x", "y"), &GridConfig::default(), BinningMode::Normalized);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_zero_resolution() {
    let df = air_quality_df();
    let result = df.region_dynamics(&AxisPair::new("Ozone", "Wind"), &GridConfig::new(0));
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn test_single_value_column() {
    let df = df![
        "x" => [5.0, 5.0, 5.0],
        "y" => [1.0, 2.0, 3.0],
    ]
    .unwrap();

    let result = df
        .region_density(&AxisPair::new("x", "y"), &GridConfig::new(2), BinningMode::Normalized)
        .unwrap();
    // Degenerate x axis: everything in column 1 of the grid
    assert_eq!(u64_values(&result, "count"), vec![1, 2, 0, 0]);
}

#[test]
fn test_negative_values_rejected_in_absolute_mode() {
    let df = df![
        "x" => [-1.0, 2.0, 3.0],
        "y" => [1.0, 2.0, 3.0],
    ]
    .unwrap();
    let axes = AxisPair::new("x", "y");

    let result = df.region_dynamics(&axes, &GridConfig::new(2));
    assert!(matches!(
        result,
        Err(Error::Region(region_core::Error::OutOfRange { .. }))
    ));

    let clamped = df
        .region_dynamics(&axes, &GridConfig::new(2).with_policy(OutOfRangePolicy::Clamp))
        .unwrap();
    // (-1, 1) is pulled into R(1,1)
    assert_eq!(u64_values(&clamped, "freq_absolute"), vec![1, 0, 0, 2]);
}

#[test]
fn test_dropped_points_keep_full_denominator() {
    let df = df![
        "x" => [-1.0, 2.0, 3.0, 0.5],
        "y" => [1.0, 2.0, 3.0, 0.5],
    ]
    .unwrap();

    let result = df
        .region_dynamics(
            &AxisPair::new("x", "y"),
            &GridConfig::new(2).with_policy(OutOfRangePolicy::Drop),
        )
        .unwrap();
    assert_eq!(u64_values(&result, "freq_absolute").iter().sum::<u64>(), 3);
    assert_eq!(u64_values(&result, "freq_normalized").iter().sum::<u64>(), 4);

    let density: f64 = result
        .column("density_absolute")
        .unwrap()
        .f64()
        .unwrap()
        .into_no_null_iter()
        .sum();
    assert!((density - 0.75).abs() < 1e-12);
}
