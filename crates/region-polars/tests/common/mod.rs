//! Common test utilities for region-polars tests

use polars::prelude::*;

/// The four-point reference scatter: (0,0), (10,10), (5,5), (5,5)
pub fn reference_df() -> DataFrame {
    df![
        "x" => [0.0, 10.0, 5.0, 5.0],
        "y" => [0.0, 10.0, 5.0, 5.0],
    ]
    .unwrap()
}

/// A small air-quality style frame with gaps in the measurements
pub fn air_quality_df() -> DataFrame {
    df![
        "Ozone" => [Some(41.0), Some(36.0), Some(12.0), Some(18.0), None, Some(28.0), Some(23.0), Some(19.0)],
        "Wind" => [Some(7.4), Some(8.0), Some(12.6), Some(11.5), Some(14.3), Some(14.9), Some(8.6), None],
        "Temp" => [67i64, 72, 74, 62, 56, 66, 65, 59],
        "Month" => ["May", "May", "May", "May", "May", "May", "May", "May"],
    ]
    .unwrap()
}

/// Extract a u64 column as a vector
pub fn u64_values(df: &DataFrame, col_name: &str) -> Vec<u64> {
    df.column(col_name)
        .unwrap()
        .u64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

/// Extract an f64 column as a vector
pub fn f64_values(df: &DataFrame, col_name: &str) -> Vec<f64> {
    df.column(col_name)
        .unwrap()
        .f64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

/// Extract a string column as a vector
pub fn str_values(df: &DataFrame, col_name: &str) -> Vec<String> {
    df.column(col_name)
        .unwrap()
        .str()
        .unwrap()
        .into_no_null_iter()
        .map(str::to_string)
        .collect()
}
