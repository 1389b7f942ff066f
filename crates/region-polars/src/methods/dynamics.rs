//! Region partitioning and dynamics implementations

use polars::prelude::*;
use region_core::{AxisPair, BinningMode, Grid};
use region_grid::{aggregate_partition, compute_dynamics, DynamicsSummary, DynamicsTable, Partitioner};
use tracing::instrument;
use crate::{GridConfig, RegionDynamicsExt, Result, ScatterPoints};

use super::extract::{non_empty_scatter, scatter_points};
use super::frames::{assignment_frame, density_frame, dynamics_frame};

fn partitioner(config: &GridConfig, mode: BinningMode) -> Result<Partitioner> {
    config.validate()?;
    let grid = Grid::new(config.k, mode)?;
    Ok(Partitioner::for_grid(grid).with_policy(config.policy))
}

fn dynamics_table(df: &DataFrame, axes: &AxisPair, config: &GridConfig) -> Result<DynamicsTable> {
    let scatter = non_empty_scatter(df, axes, None)?;

    let absolute = partitioner(config, BinningMode::Absolute)?.partition(&scatter.points)?;
    let normalized = partitioner(config, BinningMode::Normalized)?.partition(&scatter.points)?;

    let table = compute_dynamics(
        &aggregate_partition(&absolute)?,
        &aggregate_partition(&normalized)?,
        scatter.points.len(),
    )?;
    Ok(table)
}

impl RegionDynamicsExt for DataFrame {
    fn region_points(&self, axes: &AxisPair, label_column: Option<&str>) -> Result<ScatterPoints> {
        scatter_points(self, axes, label_column)
    }

    #[instrument(skip_all, fields(axes = %axes, k = config.k, mode = %mode))]
    fn region_assignments(
        &self,
        axes: &AxisPair,
        config: &GridConfig,
        mode: BinningMode,
    ) -> Result<DataFrame> {
        let label_column = config.label_column.as_deref();
        let scatter = non_empty_scatter(self, axes, label_column)?;
        let partition = partitioner(config, mode)?.partition(&scatter.points)?;
        assignment_frame(&scatter, &partition, label_column)
    }

    #[instrument(skip_all, fields(axes = %axes, k = config.k, mode = %mode))]
    fn region_density(
        &self,
        axes: &AxisPair,
        config: &GridConfig,
        mode: BinningMode,
    ) -> Result<DataFrame> {
        let scatter = non_empty_scatter(self, axes, None)?;
        let partition = partitioner(config, mode)?.partition(&scatter.points)?;
        density_frame(&aggregate_partition(&partition)?)
    }

    #[instrument(skip_all, fields(axes = %axes, k = config.k))]
    fn region_dynamics(&self, axes: &AxisPair, config: &GridConfig) -> Result<DataFrame> {
        dynamics_frame(&dynamics_table(self, axes, config)?)
    }

    fn region_dynamics_summary(
        &self,
        axes: &AxisPair,
        config: &GridConfig,
    ) -> Result<DynamicsSummary> {
        Ok(dynamics_table(self, axes, config)?.summary())
    }

    fn region_dynamics_batch(
        &self,
        pairs: &[AxisPair],
        config: &GridConfig,
    ) -> Result<Vec<DataFrame>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|axes| self.region_dynamics(axes, config))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            pairs
                .iter()
                .map(|axes| self.region_dynamics(axes, config))
                .collect()
        }
    }
}
