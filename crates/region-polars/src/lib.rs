//! Polars integration for region partitioning and region dynamics
//!
//! This crate exposes the region pipeline on Polars DataFrames through a
//! single extension trait. Columns are picked by name, rows with a missing
//! or non-finite axis value are skipped, and results come back as
//! DataFrames ready for an external renderer.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use region_polars::{AxisPair, GridConfig, RegionDynamicsExt};
//!
//! let df = df![
//!     "Ozone" => [41.0, 36.0, 12.0, 18.0, 28.0, 23.0],
//!     "Wind" => [7.4, 8.0, 12.6, 11.5, 14.3, 14.9],
//! ]?;
//!
//! let dynamics = df.region_dynamics(&AxisPair::new("Ozone", "Wind"), &GridConfig::default())?;
//! println!("{dynamics}");
//! ```

mod config;
mod error;
mod methods;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use traits::*;

// Re-export commonly used types from dependencies
pub use region_core::{AxisPair, RegionId};
pub use region_grid::DynamicsSummary;
