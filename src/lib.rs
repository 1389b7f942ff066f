//! Absolute vs. normalized region density analysis
//!
//! A scatter of points is cut into a k×k grid twice: once in raw units with
//! bins anchored at 0, and once after min-max rescaling each axis to [0, 1].
//! Comparing the two density tables region by region shows where
//! normalization moves mass: net flow, relative change ratio and
//! redistribution index.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`region_core`]: region identifiers, grids, points and errors
//! - [`region_grid`]: partitioning, density aggregation and dynamics
//! - `region_polars` (feature `polars`): the same pipeline on DataFrames
//!
//! # Example
//!
//! ```rust
//! use region_dynamics::prelude::*;
//!
//! let points: Vec<Point> = [(1.2, 0.2), (1.4, 0.3), (4.7, 1.4), (5.1, 1.9), (6.0, 2.5)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! let analysis = analyze(&points, 4, OutOfRangePolicy::Reject).unwrap();
//! assert_eq!(analysis.dynamics.len(), 16);
//! for row in analysis.dynamics.ranked_by_redistribution().iter().take(3) {
//!     println!("{row}");
//! }
//! ```

pub use region_core;
pub use region_grid;

#[cfg(feature = "polars")]
pub use region_polars;

pub use region_core::{Error, Result};

/// Commonly used types and functions
pub mod prelude {
    pub use region_core::{Axis, AxisPair, BinningMode, Grid, Point, RegionId};
    pub use region_grid::{
        aggregate, aggregate_partition, analyze, compute_dynamics, partition, DensityTable,
        DynamicsSummary, DynamicsTable, OutOfRangePolicy, Partitioner, RegionAnalysis,
        RegionDynamics,
    };

    #[cfg(feature = "polars")]
    pub use region_polars::{GridConfig, RegionDynamicsExt};
}
