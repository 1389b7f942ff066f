//! Pulling points out of DataFrame columns

use polars::prelude::*;
use region_core::{AxisPair, Point};
use tracing::debug;
use crate::{Error, Result, ScatterPoints};

/// Read a numeric column as f64, mapping null and non-finite values to `None`
fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))?;

    let float_column = match column.dtype() {
        DataType::Float64 => column.clone(),
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::UInt64
        | DataType::UInt32 => column.cast(&DataType::Float64)?,
        dt => {
            return Err(Error::TypeMismatch {
                column: name.to_string(),
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    let ca = float_column.f64()?;
    Ok(ca.iter().map(|v| v.filter(|x| x.is_finite())).collect())
}

/// Read any column as optional strings
fn label_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))?;
    let string_column = column.cast(&DataType::String)?;
    let ca = string_column.str()?;
    Ok(ca.iter().map(|v| v.map(str::to_string)).collect())
}

/// Complete rows of an axis pair as points
///
/// A row is complete when both axis values are present and finite. The
/// label, if any, may be null.
pub(crate) fn scatter_points(
    df: &DataFrame,
    axes: &AxisPair,
    label_column: Option<&str>,
) -> Result<ScatterPoints> {
    let xs = numeric_values(df, &axes.x)?;
    let ys = numeric_values(df, &axes.y)?;
    let labels = label_column
        .map(|name| label_values(df, name))
        .transpose()?;

    let mut points = Vec::with_capacity(xs.len());
    let mut rows = Vec::with_capacity(xs.len());
    for (row, (x, y)) in xs.iter().zip(&ys).enumerate() {
        if let (Some(x), Some(y)) = (x, y) {
            let mut point = Point::new(*x, *y);
            point.label = labels.as_ref().and_then(|l| l[row].clone());
            points.push(point);
            rows.push(row);
        }
    }

    let dropped = xs.len() - points.len();
    if dropped > 0 {
        debug!(axes = %axes, dropped, "skipped rows with missing axis values");
    }

    Ok(ScatterPoints {
        points,
        rows,
        dropped,
    })
}

/// Like [`scatter_points`], but an axis pair without a single complete row is an error
pub(crate) fn non_empty_scatter(
    df: &DataFrame,
    axes: &AxisPair,
    label_column: Option<&str>,
) -> Result<ScatterPoints> {
    let scatter = scatter_points(df, axes, label_column)?;
    if scatter.points.is_empty() {
        return Err(Error::InvalidInput(format!(
            "No complete rows for {axes} ({} rows skipped)",
            scatter.dropped
        )));
    }
    Ok(scatter)
}
