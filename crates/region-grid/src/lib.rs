//! Region partitioning and region dynamics for 2-D scatters
//!
//! This crate bins a scatter of points onto a k×k grid under two coordinate
//! treatments and measures how the per-region densities differ between them.
//!
//! # Key Features
//!
//! - **Two binning modes**: absolute (edges from 0 to the observed maximum) and
//!   normalized (min-max rescaled to [0, 1])
//! - **Pinned edge policy**: bins are half-open `[lo, hi)`; the first bin
//!   includes its minimum, the last bin includes its maximum, and a value on an
//!   interior cut goes to the upper bin
//! - **Complete density tables**: every one of the k² regions gets a row, even
//!   when empty
//! - **Dynamics metrics**: net flow, relative change ratio and redistribution
//!   index per region
//!
//! # Examples
//!
//! ## Partition and Aggregate
//!
//! ```rust
//! use region_core::{BinningMode, Point};
//! use region_grid::{aggregate_partition, partition};
//!
//! let points: Vec<Point> = [(0.0, 0.0), (10.0, 10.0), (5.0, 5.0), (5.0, 5.0)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! let partition = partition(&points, 2, BinningMode::Absolute).unwrap();
//! let table = aggregate_partition(&partition).unwrap();
//!
//! for row in table.rows() {
//!     println!("R({},{}) = {}", row.region_i, row.region_j, row.count);
//! }
//! assert_eq!(table.counts(), &[1, 0, 0, 3]);
//! ```
//!
//! ## Full Pipeline
//!
//! ```rust
//! use region_core::Point;
//! use region_grid::{analyze, OutOfRangePolicy};
//!
//! let points: Vec<Point> = [(6.0, 60.0), (8.0, 80.0), (10.0, 100.0)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! let analysis = analyze(&points, 2, OutOfRangePolicy::Reject).unwrap();
//! for row in &analysis.dynamics {
//!     println!("{row}");
//! }
//! assert_eq!(analysis.dynamics.summary().relocated_points, 1.0);
//! ```

pub mod analyze;
pub mod builders;
pub mod density;
pub mod dynamics;
pub mod partition;
pub mod traits;
pub mod types;

pub use analyze::{analyze, density, RegionAnalysis};
pub use builders::{binning_for, AbsoluteBinning, AxisScale, FittedAxis, NormalizedBinning};
pub use density::{aggregate, aggregate_partition, DensityRow, DensityTable};
pub use dynamics::{compute_dynamics, DynamicsSummary, DynamicsTable, RegionDynamics};
pub use partition::{partition, OutOfRangePolicy, Partitioner};
pub use traits::AxisBinning;
pub use types::{AxisEdges, Partition, RegionAssignment};

pub use region_core::{Error, Result};
