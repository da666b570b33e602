//! Histogram construction with typed binning specifications
//!
//! The original workflow accepted bin counts, bin widths, rule names, and a
//! "min" sentinel through a single duck-typed argument. Here those choices
//! are separate enums resolved to concrete numbers once, before any
//! counting happens.

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use grainsize_core::sample::{check_diameters, min_max, std_dev};
use grainsize_core::{Error, Result};

/// Where the left edge of the histogram range sits
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeftEdge {
    /// Start the range at zero (the default for diameter data)
    Zero,
    /// Start the range at the sample minimum
    SampleMin,
    /// Start the range at a caller-supplied non-negative value
    Fixed(f64),
}

impl Default for LeftEdge {
    fn default() -> Self {
        LeftEdge::Zero
    }
}

impl LeftEdge {
    /// Resolve to a concrete left edge for the given sample
    pub fn resolve(&self, sample: &[f64]) -> Result<f64> {
        match *self {
            LeftEdge::Zero => Ok(0.0),
            LeftEdge::SampleMin => {
                let (lo, _) = min_max(sample);
                Ok(lo)
            }
            LeftEdge::Fixed(edge) => {
                if !edge.is_finite() || edge < 0.0 {
                    return Err(Error::InvalidParameter(format!(
                        "left edge {edge} must be a non-negative finite scalar"
                    )));
                }
                Ok(edge)
            }
        }
    }
}

/// Automatic bin-count rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinningRule {
    /// ceil(log2(n)) + 1
    Sturges,
    /// Bin width 3.5 * sd * n^(-1/3)
    Scott,
    /// Bin width 2 * IQR * n^(-1/3)
    FreedmanDiaconis,
}

impl BinningRule {
    /// Resolve the rule to a bin count over the range `[lower, upper]`
    pub fn resolve(&self, sample: &[f64], lower: f64, upper: f64) -> usize {
        let n = sample.len();
        let range = upper - lower;

        let width = match self {
            BinningRule::Sturges => {
                return ((n as f64).log2().ceil() as usize + 1).max(1);
            }
            BinningRule::Scott => 3.5 * std_dev(sample) * (n as f64).powf(-1.0 / 3.0),
            BinningRule::FreedmanDiaconis => {
                let mut sorted = sample.to_vec();
                sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                let q1 = sorted[n / 4];
                let q3 = sorted[(3 * n) / 4];
                2.0 * (q3 - q1) * (n as f64).powf(-1.0 / 3.0)
            }
        };

        if width > f64::EPSILON {
            ((range / width).ceil() as usize).max(1)
        } else {
            1
        }
    }
}

/// How the histogram classes are determined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinSpec {
    /// A fixed number of equal-width classes
    FixedCount(usize),
    /// Equal-width classes of the given width
    FixedWidth(f64),
    /// Delegate the count to an automatic rule
    Rule(BinningRule),
}

impl Default for BinSpec {
    fn default() -> Self {
        BinSpec::FixedCount(10)
    }
}

impl BinSpec {
    /// Resolve to a concrete bin count over the range `[lower, upper]`
    ///
    /// Fails with `InvalidParameter` before any counting when the spec is
    /// malformed (zero classes, non-positive width).
    pub fn resolve(&self, sample: &[f64], lower: f64, upper: f64) -> Result<usize> {
        match *self {
            BinSpec::FixedCount(count) => {
                if count == 0 {
                    return Err(Error::InvalidParameter(
                        "the number of classes must be a positive integer".to_string(),
                    ));
                }
                Ok(count)
            }
            BinSpec::FixedWidth(width) => {
                if !width.is_finite() || width <= 0.0 {
                    return Err(Error::InvalidParameter(format!(
                        "class width {width} must be a positive finite scalar"
                    )));
                }
                Ok((((upper - lower) / width).ceil() as usize).max(1))
            }
            BinSpec::Rule(rule) => Ok(rule.resolve(sample, lower, upper)),
        }
    }
}

/// Builds uniform-width density histograms of apparent diameters
///
/// The range is `[left_edge, max(sample)]` with the last bin right-closed;
/// values below a fixed left edge are ignored, matching the range semantics
/// the unfolding algorithm was designed against.
#[derive(Debug, Clone, Default)]
pub struct DensityHistogramBuilder {
    bins: BinSpec,
    left_edge: LeftEdge,
}

impl DensityHistogramBuilder {
    /// Create a builder with the given bin specification and a zero left edge
    pub fn new(bins: BinSpec) -> Self {
        Self {
            bins,
            left_edge: LeftEdge::Zero,
        }
    }

    /// Create a builder with a fixed number of classes
    pub fn with_count(numbins: usize) -> Self {
        Self::new(BinSpec::FixedCount(numbins))
    }

    /// Set the left edge of the histogram range
    pub fn left_edge(mut self, left_edge: LeftEdge) -> Self {
        self.left_edge = left_edge;
        self
    }
}

impl HistogramBuilder for DensityHistogramBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        check_diameters(sample)?;

        let lower = self.left_edge.resolve(sample)?;
        let (_, upper) = min_max(sample);
        if upper <= lower {
            return Err(Error::InvalidInput(format!(
                "histogram range is empty: all diameters are at or below the left edge {lower}"
            )));
        }

        let numbins = self.bins.resolve(sample, lower, upper)?;
        let width = (upper - lower) / numbins as f64;

        let mut bins = Vec::with_capacity(numbins);
        for i in 0..numbins {
            let left = lower + i as f64 * width;
            let right = if i == numbins - 1 {
                upper // the last bin closes on the sample maximum
            } else {
                lower + (i + 1) as f64 * width
            };
            bins.push(HistogramBin {
                left,
                right,
                count: 0,
                density: 0.0,
            });
        }

        let mut total = 0usize;
        for &value in sample {
            if value < lower || value > upper {
                continue;
            }
            let mut index = ((value - lower) / width) as usize;
            if index >= numbins {
                index = numbins - 1;
            }
            bins[index].count += 1;
            total += 1;
        }

        for bin in &mut bins {
            bin.density = bin.count as f64 / (total as f64 * width);
        }

        Ok(Histogram::new(bins, total, lower, upper, width))
    }

    fn target_bins(&self) -> Option<usize> {
        match self.bins {
            BinSpec::FixedCount(count) => Some(count),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // The concrete scenario used throughout the stereology tests
    fn sample() -> Vec<f64> {
        vec![5.0, 8.0, 10.0, 10.0, 12.0, 15.0, 15.0, 15.0, 20.0, 25.0]
    }

    #[test]
    fn test_fixed_count_histogram() {
        let hist = DensityHistogramBuilder::with_count(5)
            .build(&sample())
            .unwrap();

        assert_eq!(hist.len(), 5);
        assert_relative_eq!(hist.bin_width(), 5.0);
        assert_eq!(hist.centers(), vec![2.5, 7.5, 12.5, 17.5, 22.5]);
        // [0,5): none; [5,10): 5, 8; [10,15): 10, 10, 12; [15,20): 15x3; [20,25]: 20, 25
        assert_eq!(hist.counts(), vec![0, 2, 3, 3, 2]);

        let integral: f64 = hist.densities().iter().sum::<f64>() * hist.bin_width();
        assert_relative_eq!(integral, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_left_edge_sample_min() {
        let hist = DensityHistogramBuilder::with_count(4)
            .left_edge(LeftEdge::SampleMin)
            .build(&sample())
            .unwrap();

        assert_relative_eq!(hist.lower(), 5.0);
        assert_relative_eq!(hist.upper(), 25.0);
        assert_relative_eq!(hist.bin_width(), 5.0);
        assert_eq!(hist.total_count(), 10);
    }

    #[test]
    fn test_fixed_left_edge_drops_smaller_values() {
        let hist = DensityHistogramBuilder::with_count(4)
            .left_edge(LeftEdge::Fixed(10.0))
            .build(&sample())
            .unwrap();

        // 5 and 8 fall outside the range
        assert_eq!(hist.total_count(), 8);
        let integral: f64 = hist.densities().iter().sum::<f64>() * hist.bin_width();
        assert_relative_eq!(integral, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_classes_is_rejected_before_binning() {
        let err = DensityHistogramBuilder::with_count(0)
            .build(&sample())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        let err = DensityHistogramBuilder::new(BinSpec::FixedWidth(0.0))
            .build(&sample())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        let err = DensityHistogramBuilder::new(BinSpec::FixedWidth(-2.5))
            .build(&sample())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_invalid_samples_are_rejected() {
        let builder = DensityHistogramBuilder::with_count(5);
        assert!(builder.build(&[]).is_err());
        assert!(builder.build(&[1.0, -3.0]).is_err());
        assert!(builder.build(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_negative_left_edge_is_rejected() {
        let err = DensityHistogramBuilder::with_count(5)
            .left_edge(LeftEdge::Fixed(-1.0))
            .build(&sample())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_fixed_width_spec() {
        let hist = DensityHistogramBuilder::new(BinSpec::FixedWidth(5.0))
            .build(&sample())
            .unwrap();
        assert_eq!(hist.len(), 5);
        assert_relative_eq!(hist.bin_width(), 5.0);
    }

    #[test]
    fn test_sturges_rule() {
        // n = 10 -> ceil(log2(10)) + 1 = 5
        assert_eq!(BinningRule::Sturges.resolve(&sample(), 0.0, 25.0), 5);
    }

    #[test]
    fn test_scott_rule_on_gaussian_data() {
        use rand::SeedableRng;
        use rand_distr::{Distribution, Normal};

        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let normal = Normal::<f64>::new(50.0, 10.0).unwrap();
        let data: Vec<f64> = (0..500).map(|_| normal.sample(&mut rng).max(0.1)).collect();

        let hist = DensityHistogramBuilder::new(BinSpec::Rule(BinningRule::Scott))
            .left_edge(LeftEdge::SampleMin)
            .build(&data)
            .unwrap();

        // Scott's rule lands in a sane band for n=500 gaussian data
        assert!(hist.len() >= 5 && hist.len() <= 40, "got {} bins", hist.len());
    }

    #[test]
    fn test_rule_degenerate_spread_collapses_to_one_bin() {
        let data = vec![4.0, 4.0, 4.0, 4.0];
        assert_eq!(BinningRule::Scott.resolve(&data, 0.0, 4.0), 1);
    }

    #[test]
    fn test_last_bin_includes_maximum() {
        let hist = DensityHistogramBuilder::with_count(5)
            .build(&sample())
            .unwrap();
        assert_eq!(hist.find_bin(25.0), Some(4));
    }
}
