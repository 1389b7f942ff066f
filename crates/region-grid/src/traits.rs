//! Core traits for axis binning

use crate::builders::FittedAxis;
use region_core::{BinningMode, Result};

/// Trait for fitting bin edges to one axis of a scatter
pub trait AxisBinning {
    /// Fit `bins` bins to the observed values of an axis
    ///
    /// Values must be finite and non-empty; cleaning happens upstream.
    fn fit(&self, values: &[f64], bins: usize) -> Result<FittedAxis>;

    /// The coordinate treatment this binning implements
    fn mode(&self) -> BinningMode;
}
