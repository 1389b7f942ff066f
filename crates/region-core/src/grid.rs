//! Grid definitions

use crate::{Error, RegionId, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How coordinates are treated before binning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinningMode {
    /// Raw units, bins spread from 0 to the observed maximum
    #[default]
    Absolute,
    /// Min-max rescaled to [0, 1], bins spread over the unit interval
    Normalized,
}

impl BinningMode {
    /// Get the name of this mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Normalized => "normalized",
        }
    }
}

impl fmt::Display for BinningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A square k×k grid under one binning mode
///
/// All k² regions exist whether or not any point lands in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    k: usize,
    mode: BinningMode,
}

impl Grid {
    /// Create a grid with `k` bins per axis
    pub fn new(k: usize, mode: BinningMode) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidParameter(
                "Grid resolution k must be at least 1".to_string(),
            ));
        }
        Ok(Self { k, mode })
    }

    /// Bins per axis
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn mode(&self) -> BinningMode {
        self.mode
    }

    /// Total number of regions (k²)
    pub fn region_count(&self) -> usize {
        self.k * self.k
    }

    /// Whether a region lies inside this grid
    pub fn contains(&self, region: RegionId) -> bool {
        (1..=self.k).contains(&region.i()) && (1..=self.k).contains(&region.j())
    }

    /// Position of a region in canonical order, if it belongs to the grid
    pub fn position(&self, region: RegionId) -> Option<usize> {
        self.contains(region)
            .then(|| (region.i() - 1) * self.k + (region.j() - 1))
    }

    /// Region at a canonical position
    pub fn region_at(&self, position: usize) -> Option<RegionId> {
        (position < self.region_count())
            .then(|| RegionId::from_bins(position / self.k, position % self.k))
    }

    /// Every region, enumerated in `(i, j)` lexicographic order
    pub fn regions(&self) -> impl Iterator<Item = RegionId> {
        let k = self.k;
        (0..k).flat_map(move |x| (0..k).map(move |y| RegionId::from_bins(x, y)))
    }

    /// Same grid under another mode
    pub fn with_mode(&self, mode: BinningMode) -> Self {
        Self { k: self.k, mode }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({}x{}, {})", self.k, self.k, self.mode)
    }
}
