//! Axis binning strategies

use crate::traits::AxisBinning;
use crate::types::AxisEdges;
use region_core::{BinningMode, Error, Result};
use tracing::{debug, warn};

/// Coordinate transform applied before an axis value is binned
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisScale {
    /// Raw units
    Identity,
    /// `(v - min) / (max - min)`
    MinMax { min: f64, max: f64 },
    /// Degenerate min-max scaling: every value maps to 0
    Constant,
}

impl AxisScale {
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            AxisScale::Identity => value,
            AxisScale::MinMax { min, max } => {
                let range = max - min;
                if range.is_finite() {
                    (value - min) / range
                } else {
                    // Span beyond f64::MAX; halving every term is exact and keeps it finite
                    (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
                }
            }
            AxisScale::Constant => 0.0,
        }
    }
}

/// Bin edges fitted to one axis, plus the transform that maps raw values
/// into the edge space
#[derive(Debug, Clone, PartialEq)]
pub struct FittedAxis {
    scale: AxisScale,
    edges: AxisEdges,
}

impl FittedAxis {
    pub fn new(scale: AxisScale, edges: AxisEdges) -> Self {
        Self { scale, edges }
    }

    pub fn scale(&self) -> AxisScale {
        self.scale
    }

    pub fn edges(&self) -> &AxisEdges {
        &self.edges
    }

    /// Map a raw value into the edge space
    pub fn transform(&self, value: f64) -> f64 {
        self.scale.apply(value)
    }

    /// 0-based bin of a raw value, `None` when it falls outside the edges
    pub fn locate(&self, value: f64) -> Option<usize> {
        self.edges.locate(self.transform(value))
    }

    /// 0-based bin of a raw value, pulling out-of-range values to the nearest edge bin
    pub fn locate_clamped(&self, value: f64) -> Option<usize> {
        self.edges.locate_clamped(self.transform(value))
    }
}

/// Absolute binning
///
/// Edges are evenly spaced from 0 to the observed maximum. The lower bound
/// is always 0, whatever the observed minimum, so negative values fall
/// outside every bin.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteBinning;

impl AxisBinning for AbsoluteBinning {
    fn fit(&self, values: &[f64], bins: usize) -> Result<FittedAxis> {
        check_bins(bins)?;
        let (_, max) = observed_range(values)?;

        if max <= 0.0 {
            warn!(max, "absolute axis has no positive values; at most 0 is in range (nothing when max < 0)");
        }

        let edges = AxisEdges::linspace(0.0, max, bins);
        debug!(%edges, "fitted absolute axis");
        Ok(FittedAxis::new(AxisScale::Identity, edges))
    }

    fn mode(&self) -> BinningMode {
        BinningMode::Absolute
    }
}

/// Normalized binning
///
/// Values are min-max rescaled to [0, 1] and binned against evenly spaced
/// edges over the unit interval. When every value is identical the axis is
/// degenerate and all points go to the first bin.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedBinning;

impl AxisBinning for NormalizedBinning {
    fn fit(&self, values: &[f64], bins: usize) -> Result<FittedAxis> {
        check_bins(bins)?;
        let (min, max) = observed_range(values)?;

        let scale = if max > min {
            AxisScale::MinMax { min, max }
        } else {
            warn!(value = min, "degenerate range on normalized axis; assigning every point to bin 1");
            AxisScale::Constant
        };

        let edges = AxisEdges::linspace(0.0, 1.0, bins);
        debug!(min, max, %edges, "fitted normalized axis");
        Ok(FittedAxis::new(scale, edges))
    }

    fn mode(&self) -> BinningMode {
        BinningMode::Normalized
    }
}

/// Binning strategy for a mode
pub fn binning_for(mode: BinningMode) -> &'static dyn AxisBinning {
    match mode {
        BinningMode::Absolute => &AbsoluteBinning,
        BinningMode::Normalized => &NormalizedBinning,
    }
}

fn check_bins(bins: usize) -> Result<()> {
    if bins == 0 {
        return Err(Error::InvalidParameter(
            "Number of bins must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Observed (min, max) of finite values
fn observed_range(values: &[f64]) -> Result<(f64, f64)> {
    if values.is_empty() {
        return Err(Error::empty_input("axis binning"));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("axis values"));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((min, max))
}
