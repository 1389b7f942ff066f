//! Points and axis selectors

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two axes of a scatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A single observation of a 2-D scatter
///
/// The optional label is carried through partitioning untouched; none of the
/// region metrics look at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Point {
    /// Create an unlabelled point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    /// Attach a category label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Coordinate on the given axis
    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Build unlabelled points from two parallel coordinate slices
    pub fn from_columns(xs: &[f64], ys: &[f64]) -> crate::Result<Vec<Point>> {
        if xs.len() != ys.len() {
            return Err(crate::Error::size_mismatch(xs.len(), ys.len(), "coordinate columns"));
        }
        Ok(xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Names the two measurement columns that make up one scatter
///
/// Each axis pair (say sepal length vs. sepal width) runs through the
/// pipeline independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisPair {
    pub x: String,
    pub y: String,
}

impl AxisPair {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Column name bound to an axis
    pub fn name(&self, axis: Axis) -> &str {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

impl fmt::Display for AxisPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.x, self.y)
    }
}
