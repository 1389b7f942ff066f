//! Core traits for region dynamics on Polars DataFrames

use polars::prelude::*;
use region_core::{AxisPair, BinningMode, Point};
use region_grid::DynamicsSummary;
use crate::{GridConfig, Result};

/// Points pulled out of a DataFrame for one axis pair
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoints {
    /// Complete rows as points, in frame order
    pub points: Vec<Point>,
    /// Frame row index of each point
    pub rows: Vec<usize>,
    /// Rows skipped because an axis value was null, NaN or infinite
    pub dropped: usize,
}

/// Extension trait for region partitioning on Polars DataFrames
pub trait RegionDynamicsExt {
    /// Extract the complete rows of two numeric columns as points
    ///
    /// # Arguments
    /// * `axes` - Columns to use as the x and y axes
    /// * `label_column` - Optional column attached to each point as its label
    ///
    /// # Returns
    /// The points plus bookkeeping about skipped rows
    fn region_points(&self, axes: &AxisPair, label_column: Option<&str>) -> Result<ScatterPoints>;

    /// Assign every complete row to a region
    ///
    /// # Returns
    /// DataFrame with columns `row, [label], region_i, region_j, region`;
    /// rows dropped by the out-of-range policy are omitted
    fn region_assignments(
        &self,
        axes: &AxisPair,
        config: &GridConfig,
        mode: BinningMode,
    ) -> Result<DataFrame>;

    /// Count rows per region over the complete grid
    ///
    /// # Returns
    /// DataFrame with columns `region_i, region_j, count` (k² rows)
    fn region_density(
        &self,
        axes: &AxisPair,
        config: &GridConfig,
        mode: BinningMode,
    ) -> Result<DataFrame>;

    /// Compare absolute and normalized partitions region by region
    ///
    /// # Returns
    /// DataFrame with columns `region, freq_absolute, freq_normalized,
    /// density_absolute, density_normalized, net_flow, relative_change_ratio,
    /// redistribution_index` (k² rows)
    fn region_dynamics(&self, axes: &AxisPair, config: &GridConfig) -> Result<DataFrame>;

    /// Grid-wide summary of the dynamics for one axis pair
    fn region_dynamics_summary(
        &self,
        axes: &AxisPair,
        config: &GridConfig,
    ) -> Result<DynamicsSummary>;

    /// Run [`region_dynamics`](Self::region_dynamics) for several axis pairs
    ///
    /// Pairs are independent; with the `parallel` feature they are evaluated
    /// concurrently. Output order follows `pairs`.
    fn region_dynamics_batch(
        &self,
        pairs: &[AxisPair],
        config: &GridConfig,
    ) -> Result<Vec<DataFrame>>;
}
