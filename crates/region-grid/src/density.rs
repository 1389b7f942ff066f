//! Region density aggregation
//!
//! Counts partitioned points per region and completes the table over the
//! full k×k grid. Completion matters: a region nobody landed in still gets a
//! row with count 0, so the dynamics join never skips an empty region.

use crate::types::{Partition, RegionAssignment};
use region_core::{BinningMode, Error, Grid, RegionId, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::instrument;

/// One row of a density table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityRow {
    pub region_i: usize,
    pub region_j: usize,
    pub count: u64,
}

/// Point counts for every region of a k×k grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityTable {
    grid: Grid,
    /// Counts in canonical region order
    counts: Vec<u64>,
}

impl DensityTable {
    /// Get the grid this table covers
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Bins per axis
    pub fn k(&self) -> usize {
        self.grid.k()
    }

    pub fn mode(&self) -> BinningMode {
        self.grid.mode()
    }

    /// Number of rows (always k²)
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false: a grid has at least one region
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for a region, `None` if the region is not on this grid
    pub fn count(&self, region: RegionId) -> Option<u64> {
        self.grid.position(region).map(|pos| self.counts[pos])
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest count in any region
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Regions and counts in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, u64)> + '_ {
        self.grid.regions().zip(self.counts.iter().copied())
    }

    /// Counts as a vector in canonical order
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Rows for the external table (`region_i, region_j, count`)
    pub fn rows(&self) -> Vec<DensityRow> {
        self.iter()
            .map(|(region, count)| DensityRow {
                region_i: region.i(),
                region_j: region.j(),
                count,
            })
            .collect()
    }

    /// Counts as a k×k matrix, indexed `[i - 1][j - 1]`
    pub fn to_matrix(&self) -> Vec<Vec<u64>> {
        self.counts.chunks(self.k()).map(<[u64]>::to_vec).collect()
    }
}

impl fmt::Display for DensityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DensityTable({}, total={}, max={})",
            self.grid,
            self.total(),
            self.max_count()
        )
    }
}

/// Count assignments per region over a complete k×k grid
///
/// Assignments pointing outside the grid are rejected.
#[instrument(skip(assignments), fields(n = assignments.len()))]
pub fn aggregate(assignments: &[RegionAssignment], grid: Grid) -> Result<DensityTable> {
    let mut observed: HashMap<RegionId, u64> = HashMap::new();
    for a in assignments {
        if !grid.contains(a.region) {
            return Err(Error::InvalidInput(format!(
                "Region {} of point {} lies outside {}",
                a.region, a.index, grid
            )));
        }
        *observed.entry(a.region).or_insert(0) += 1;
    }

    // Complete the cross product; absent regions count 0
    let counts = grid
        .regions()
        .map(|region| observed.get(&region).copied().unwrap_or(0))
        .collect();

    Ok(DensityTable { grid, counts })
}

/// Aggregate a partition over its own grid
pub fn aggregate_partition(partition: &Partition) -> Result<DensityTable> {
    aggregate(partition.assignments(), partition.grid())
}
