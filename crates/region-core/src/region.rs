//! Region identifiers
//!
//! A region is one cell of a k×k grid, addressed by a 1-based `(i, j)` pair
//! where `i` indexes the x axis and `j` the y axis. The pair is the key used
//! everywhere inside the crates; the `"R(i,j)"` string form only appears at
//! the presentation boundary (DataFrames, serialized rows, logs).
//!
//! Ordering is lexicographic on `(i, j)`, which is also the canonical order
//! in which every table enumerates its rows.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRegionId")]
pub struct RegionId {
    i: usize,
    j: usize,
}

/// Unchecked wire form; deserialization goes through [`RegionId::new`]
#[derive(Deserialize)]
struct RawRegionId {
    i: usize,
    j: usize,
}

impl TryFrom<RawRegionId> for RegionId {
    type Error = Error;

    fn try_from(raw: RawRegionId) -> Result<Self> {
        RegionId::new(raw.i, raw.j)
    }
}

impl RegionId {
    /// Create a region identifier from 1-based indices
    pub fn new(i: usize, j: usize) -> Result<Self> {
        if i == 0 || j == 0 {
            return Err(Error::InvalidParameter(format!(
                "Region indices are 1-based, got ({i}, {j})"
            )));
        }
        Ok(Self { i, j })
    }

    /// Create from 0-based bin positions, as produced by axis binning
    pub fn from_bins(x_bin: usize, y_bin: usize) -> Self {
        Self {
            i: x_bin + 1,
            j: y_bin + 1,
        }
    }

    /// Index along the x axis (1-based)
    pub fn i(&self) -> usize {
        self.i
    }

    /// Index along the y axis (1-based)
    pub fn j(&self) -> usize {
        self.j
    }

    /// Display label, `"R(i,j)"`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R({},{})", self.i, self.j)
    }
}

impl FromStr for RegionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidLabel(s.to_string());

        let inner = s
            .trim()
            .strip_prefix("R(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let (i, j) = inner.split_once(',').ok_or_else(invalid)?;
        let i: usize = i.trim().parse().map_err(|_| invalid())?;
        let j: usize = j.trim().parse().map_err(|_| invalid())?;

        RegionId::new(i, j).map_err(|_| invalid())
    }
}

/// Format a region label from raw indices
pub fn label(i: usize, j: usize) -> String {
    format!("R({i},{j})")
}

/// Parse a region label back into its indices
pub fn parse_label(s: &str) -> Result<(usize, usize)> {
    let region: RegionId = s.parse()?;
    Ok((region.i, region.j))
}
