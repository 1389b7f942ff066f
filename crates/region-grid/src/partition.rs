//! Mapping points onto grid regions

use crate::builders::{binning_for, FittedAxis};
use crate::types::{Partition, RegionAssignment};
use region_core::{Axis, BinningMode, Error, Grid, Point, RegionId, Result};
use tracing::{debug, instrument};

/// What to do with a coordinate that falls outside its axis edges
///
/// Only absolute binning can produce such values (anything below the fixed
/// lower bound of 0); normalized coordinates are bounded by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfRangePolicy {
    /// Fail with [`Error::OutOfRange`]
    #[default]
    Reject,
    /// Assign to the nearest edge bin
    Clamp,
    /// Leave the point without a region
    Drop,
}

/// Assigns points to the regions of a grid
#[derive(Debug, Clone, Copy)]
pub struct Partitioner {
    grid: Grid,
    policy: OutOfRangePolicy,
}

impl Partitioner {
    /// Create a partitioner for a k×k grid
    pub fn new(k: usize, mode: BinningMode) -> Result<Self> {
        Ok(Self::for_grid(Grid::new(k, mode)?))
    }

    pub fn for_grid(grid: Grid) -> Self {
        Self {
            grid,
            policy: OutOfRangePolicy::default(),
        }
    }

    /// Set the out-of-range policy
    pub fn with_policy(mut self, policy: OutOfRangePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }

    /// Partition a point set
    ///
    /// Bin edges are fitted to this point set on each call; nothing carries
    /// over between calls.
    #[instrument(skip(self, points), fields(grid = %self.grid, n = points.len()))]
    pub fn partition(&self, points: &[Point]) -> Result<Partition> {
        if points.is_empty() {
            return Err(Error::empty_input("partition"));
        }

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        check_finite(&xs, Axis::X)?;
        check_finite(&ys, Axis::Y)?;

        let binning = binning_for(self.grid.mode());
        let x_axis = binning.fit(&xs, self.grid.k())?;
        let y_axis = binning.fit(&ys, self.grid.k())?;

        let mut assignments = Vec::with_capacity(points.len());
        let mut dropped = Vec::new();
        let mut clamped = 0usize;

        for (index, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
            let x_bin = x_axis.locate(x);
            let y_bin = y_axis.locate(y);

            let bins = match (x_bin, y_bin) {
                (Some(xb), Some(yb)) => Some((xb, yb)),
                _ => match self.policy {
                    OutOfRangePolicy::Reject => {
                        let (axis, value, fitted) = if x_bin.is_none() {
                            (Axis::X, x, &x_axis)
                        } else {
                            (Axis::Y, y, &y_axis)
                        };
                        return Err(out_of_range(axis, index, value, fitted));
                    }
                    OutOfRangePolicy::Clamp => {
                        clamped += 1;
                        x_axis.locate_clamped(x).zip(y_axis.locate_clamped(y))
                    }
                    OutOfRangePolicy::Drop => None,
                },
            };

            match bins {
                Some((xb, yb)) => assignments.push(RegionAssignment {
                    index,
                    region: RegionId::from_bins(xb, yb),
                }),
                None => dropped.push(index),
            }
        }

        if clamped > 0 {
            debug!(clamped, "clamped out-of-range points into edge regions");
        }
        if !dropped.is_empty() {
            debug!(dropped = dropped.len(), "dropped out-of-range points");
        }

        Ok(Partition::new(
            self.grid,
            x_axis.edges().clone(),
            y_axis.edges().clone(),
            assignments,
            dropped,
            points.len(),
        ))
    }
}

/// Partition points over a k×k grid, rejecting out-of-range values
pub fn partition(points: &[Point], k: usize, mode: BinningMode) -> Result<Partition> {
    Partitioner::new(k, mode)?.partition(points)
}

fn check_finite(values: &[f64], axis: Axis) -> Result<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite(&format!("{axis} axis")));
    }
    Ok(())
}

fn out_of_range(axis: Axis, index: usize, value: f64, fitted: &FittedAxis) -> Error {
    Error::OutOfRange {
        axis,
        index,
        value,
        lower: fitted.edges().lower(),
        upper: fitted.edges().upper(),
    }
}
