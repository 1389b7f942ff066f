//! Configuration for region partitioning on DataFrames

use crate::{Error, Result};
pub use region_core::BinningMode;
pub use region_grid::OutOfRangePolicy;

/// Grid resolution used when no other is given
pub const DEFAULT_RESOLUTION: usize = 4;

/// Settings shared by every region operation on a DataFrame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Bins per axis; the grid has k² regions
    pub k: usize,

    /// Handling of values below the absolute-mode lower bound of 0
    pub policy: OutOfRangePolicy,

    /// Column carried through to assignment frames untouched
    pub label_column: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_RESOLUTION,
            policy: OutOfRangePolicy::default(),
            label_column: None,
        }
    }
}

impl GridConfig {
    /// Create a configuration with `k` bins per axis
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: OutOfRangePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_label_column(mut self, column: impl Into<String>) -> Self {
        self.label_column = Some(column.into());
        self
    }

    /// Check the configuration before any data is touched
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidParameter(
                "Grid resolution k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
