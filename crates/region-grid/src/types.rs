//! Core types for axis binning and grid partitions

use region_core::{Grid, RegionId};
use std::fmt;

/// Cut points of one axis
///
/// Holds `bins + 1` increasing edges. Bin `b` covers `[edges[b], edges[b + 1])`,
/// except the last bin, which also includes its right edge. A value sitting
/// exactly on an interior cut therefore belongs to the upper bin.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisEdges {
    edges: Vec<f64>,
}

impl AxisEdges {
    /// Evenly spaced edges from `lower` to `upper`
    pub fn linspace(lower: f64, upper: f64, bins: usize) -> Self {
        let bins = bins.max(1);
        let step = (upper - lower) / bins as f64;
        let mut edges: Vec<f64> = (0..=bins).map(|b| lower + b as f64 * step).collect();
        // Pin the last edge so the maximum is never lost to rounding
        edges[bins] = upper;
        Self { edges }
    }

    /// Get the edges (including the rightmost one)
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of bins
    pub fn bins(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn lower(&self) -> f64 {
        self.edges[0]
    }

    pub fn upper(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// True when the edges collapse onto a single value
    pub fn is_degenerate(&self) -> bool {
        self.upper() <= self.lower()
    }

    /// Check if a value lies within `[lower, upper]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower() && value <= self.upper()
    }

    /// Find the 0-based bin holding a value
    ///
    /// Returns `None` for values outside `[lower, upper]` and for NaN. On a
    /// degenerate axis the only in-range value lands in the first bin.
    pub fn locate(&self, value: f64) -> Option<usize> {
        if !self.contains(value) {
            return None;
        }
        if self.is_degenerate() {
            return Some(0);
        }
        let interior = &self.edges[1..self.bins()];
        Some(interior.partition_point(|&cut| cut <= value))
    }

    /// Like [`locate`](Self::locate), but pulls out-of-range values into the
    /// nearest edge bin
    pub fn locate_clamped(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        if value < self.lower() {
            return Some(0);
        }
        if value > self.upper() {
            return Some(self.bins() - 1);
        }
        self.locate(value)
    }
}

impl fmt::Display for AxisEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (n, edge) in self.edges.iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{edge:.3}")?;
        }
        write!(f, "]")
    }
}

/// The region one point was assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionAssignment {
    /// Position of the point in the input slice
    pub index: usize,
    pub region: RegionId,
}

/// Result of partitioning a point set over a grid
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    grid: Grid,
    x_edges: AxisEdges,
    y_edges: AxisEdges,
    assignments: Vec<RegionAssignment>,
    dropped: Vec<usize>,
    total_points: usize,
}

impl Partition {
    pub(crate) fn new(
        grid: Grid,
        x_edges: AxisEdges,
        y_edges: AxisEdges,
        assignments: Vec<RegionAssignment>,
        dropped: Vec<usize>,
        total_points: usize,
    ) -> Self {
        Self {
            grid,
            x_edges,
            y_edges,
            assignments,
            dropped,
            total_points,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Edges used on the x axis, in the binned coordinate space
    pub fn x_edges(&self) -> &AxisEdges {
        &self.x_edges
    }

    /// Edges used on the y axis, in the binned coordinate space
    pub fn y_edges(&self) -> &AxisEdges {
        &self.y_edges
    }

    /// Assignments in input order
    pub fn assignments(&self) -> &[RegionAssignment] {
        &self.assignments
    }

    /// Indices of points that received no region
    pub fn dropped(&self) -> &[usize] {
        &self.dropped
    }

    /// Number of input points, assigned or not
    pub fn total_points(&self) -> usize {
        self.total_points
    }

    /// Number of points that received a region
    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    /// Region of the point at `index`, if it was assigned one
    pub fn region_of(&self, index: usize) -> Option<RegionId> {
        self.assignments
            .binary_search_by_key(&index, |a| a.index)
            .ok()
            .map(|pos| self.assignments[pos].region)
    }

    /// Regions as a vector in input order, `None` for dropped points
    pub fn regions(&self) -> Vec<Option<RegionId>> {
        let mut out = vec![None; self.total_points];
        for a in &self.assignments {
            out[a.index] = Some(a.region);
        }
        out
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Partition({}, n={}, dropped={}, x={}, y={})",
            self.grid,
            self.total_points,
            self.dropped.len(),
            self.x_edges,
            self.y_edges
        )
    }
}
