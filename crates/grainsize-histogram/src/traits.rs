//! Core traits for histogram building

use crate::types::Histogram;
use grainsize_core::Result;

/// Trait for building histograms from sample data
pub trait HistogramBuilder {
    /// Build a histogram from the given sample
    fn build(&self, sample: &[f64]) -> Result<Histogram>;

    /// Get the target number of bins (if known before seeing the data)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
