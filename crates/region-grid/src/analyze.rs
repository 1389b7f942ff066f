//! End-to-end pipeline for one scatter
//!
//! points → partition (absolute and normalized) → aggregate → dynamics

use crate::density::{aggregate_partition, DensityTable};
use crate::dynamics::{compute_dynamics, DynamicsTable};
use crate::partition::{OutOfRangePolicy, Partitioner};
use crate::types::Partition;
use region_core::{BinningMode, Grid, Point, Result};
use tracing::{info_span, instrument};

/// Everything the pipeline produces for one scatter
#[derive(Debug, Clone, PartialEq)]
pub struct RegionAnalysis {
    pub absolute_partition: Partition,
    pub normalized_partition: Partition,
    pub absolute: DensityTable,
    pub normalized: DensityTable,
    pub dynamics: DynamicsTable,
}

/// Run the full pipeline on a point set
#[instrument(skip(points), fields(n = points.len()))]
pub fn analyze(points: &[Point], k: usize, policy: OutOfRangePolicy) -> Result<RegionAnalysis> {
    let grid = Grid::new(k, BinningMode::Absolute)?;

    let (absolute_partition, absolute) = {
        let _span = info_span!("absolute").entered();
        run_mode(points, grid, policy)?
    };
    let (normalized_partition, normalized) = {
        let _span = info_span!("normalized").entered();
        run_mode(points, grid.with_mode(BinningMode::Normalized), policy)?
    };

    let dynamics = compute_dynamics(&absolute, &normalized, points.len())?;

    Ok(RegionAnalysis {
        absolute_partition,
        normalized_partition,
        absolute,
        normalized,
        dynamics,
    })
}

/// Partition and aggregate under a single mode
pub fn density(points: &[Point], k: usize, mode: BinningMode, policy: OutOfRangePolicy) -> Result<DensityTable> {
    let grid = Grid::new(k, mode)?;
    run_mode(points, grid, policy).map(|(_, table)| table)
}

fn run_mode(points: &[Point], grid: Grid, policy: OutOfRangePolicy) -> Result<(Partition, DensityTable)> {
    let partition = Partitioner::for_grid(grid)
        .with_policy(policy)
        .partition(points)?;
    let table = aggregate_partition(&partition)?;
    Ok((partition, table))
}
