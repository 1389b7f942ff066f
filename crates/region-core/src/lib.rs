//! Core types for region partitioning and region dynamics
//!
//! This crate provides the vocabulary shared by the rest of the workspace:
//!
//! - [`Point`] and [`AxisPair`]: the 2-D observations and the column pair they come from
//! - [`Grid`] and [`BinningMode`]: a k×k grid under absolute or normalized binning
//! - [`RegionId`]: the `(i, j)` key of one grid cell, displayed as `"R(i,j)"`
//! - [`Error`] and [`Result`]: the error type used by every crate
//!
//! # Example
//!
//! ```rust
//! use region_core::{BinningMode, Grid, RegionId};
//!
//! let grid = Grid::new(4, BinningMode::Absolute).unwrap();
//! assert_eq!(grid.region_count(), 16);
//!
//! let first = grid.regions().next().unwrap();
//! assert_eq!(first.label(), "R(1,1)");
//! assert_eq!("R(1,1)".parse::<RegionId>().unwrap(), first);
//! ```

pub mod error;
pub mod grid;
pub mod point;
pub mod region;

pub use error::{Error, Result};
pub use grid::{BinningMode, Grid};
pub use point::{Axis, AxisPair, Point};
pub use region::RegionId;
