//! Converting region tables into DataFrames

use polars::prelude::*;
use region_grid::{DensityTable, DynamicsTable, Partition};
use crate::{Result, ScatterPoints};

pub(crate) fn density_frame(table: &DensityTable) -> Result<DataFrame> {
    let rows = table.rows();

    let region_i: Vec<u32> = rows.iter().map(|r| r.region_i as u32).collect();
    let region_j: Vec<u32> = rows.iter().map(|r| r.region_j as u32).collect();
    let count: Vec<u64> = rows.iter().map(|r| r.count).collect();

    Ok(DataFrame::new(vec![
        Series::new("region_i".into(), region_i).into(),
        Series::new("region_j".into(), region_j).into(),
        Series::new("count".into(), count).into(),
    ])?)
}

pub(crate) fn dynamics_frame(table: &DynamicsTable) -> Result<DataFrame> {
    let n = table.len();
    let mut region = Vec::with_capacity(n);
    let mut freq_absolute = Vec::with_capacity(n);
    let mut freq_normalized = Vec::with_capacity(n);
    let mut density_absolute = Vec::with_capacity(n);
    let mut density_normalized = Vec::with_capacity(n);
    let mut net_flow = Vec::with_capacity(n);
    let mut relative_change_ratio = Vec::with_capacity(n);
    let mut redistribution_index = Vec::with_capacity(n);

    for row in table {
        region.push(row.region.label());
        freq_absolute.push(row.freq_absolute);
        freq_normalized.push(row.freq_normalized);
        density_absolute.push(row.density_absolute);
        density_normalized.push(row.density_normalized);
        net_flow.push(row.net_flow);
        relative_change_ratio.push(row.relative_change_ratio);
        redistribution_index.push(row.redistribution_index);
    }

    Ok(DataFrame::new(vec![
        Series::new("region".into(), region).into(),
        Series::new("freq_absolute".into(), freq_absolute).into(),
        Series::new("freq_normalized".into(), freq_normalized).into(),
        Series::new("density_absolute".into(), density_absolute).into(),
        Series::new("density_normalized".into(), density_normalized).into(),
        Series::new("net_flow".into(), net_flow).into(),
        Series::new("relative_change_ratio".into(), relative_change_ratio).into(),
        Series::new("redistribution_index".into(), redistribution_index).into(),
    ])?)
}

/// One row per assigned point, keyed by its row in the source frame
pub(crate) fn assignment_frame(
    scatter: &ScatterPoints,
    partition: &Partition,
    label_column: Option<&str>,
) -> Result<DataFrame> {
    let assignments = partition.assignments();

    let row: Vec<u64> = assignments
        .iter()
        .map(|a| scatter.rows[a.index] as u64)
        .collect();
    let region_i: Vec<u32> = assignments.iter().map(|a| a.region.i() as u32).collect();
    let region_j: Vec<u32> = assignments.iter().map(|a| a.region.j() as u32).collect();
    let region: Vec<String> = assignments.iter().map(|a| a.region.label()).collect();

    let mut columns: Vec<Column> = vec![Series::new("row".into(), row).into()];
    if let Some(name) = label_column {
        let labels: Vec<Option<String>> = assignments
            .iter()
            .map(|a| scatter.points[a.index].label.clone())
            .collect();
        columns.push(Series::new(name.into(), labels).into());
    }
    columns.push(Series::new("region_i".into(), region_i).into());
    columns.push(Series::new("region_j".into(), region_j).into());
    columns.push(Series::new("region".into(), region).into());

    Ok(DataFrame::new(columns)?)
}
