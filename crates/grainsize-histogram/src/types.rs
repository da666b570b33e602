//! Core types for histogram representation

use std::fmt;

/// A single bin in a density histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    ///
    /// The density is computed against the builder's uniform bin width, not
    /// the bin's own edge span, so that `sum(density * width)` is exactly 1.
    pub fn new(left: f64, right: f64, count: usize, total_count: usize, width: f64) -> Self {
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };

        Self {
            left,
            right,
            count,
            density,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// A uniform-width density histogram over `[lower, upper]`
///
/// Invariants maintained by the builders: edges are strictly increasing and
/// uniformly spaced, the last bin is right-closed, and the densities
/// integrate to one over the histogram range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    lower: f64,
    upper: f64,
    bin_width: f64,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(
        bins: Vec<HistogramBin>,
        total_count: usize,
        lower: f64,
        upper: f64,
        bin_width: f64,
    ) -> Self {
        Self {
            bins,
            total_count,
            lower,
            upper,
            bin_width,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the number of data points counted into the histogram range
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Left edge of the histogram range
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Right edge of the histogram range
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// The uniform bin width
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // The last bin includes its right boundary
        if let Some(last) = self.bins.last() {
            if value == last.right {
                return Some(self.bins.len() - 1);
            }
        }
        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get densities as a vector
    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.density).collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.center()).collect()
    }

    /// Get bin edges (including the rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        if self.bins.is_empty() {
            return vec![];
        }

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        for bin in &self.bins {
            edges.push(bin.left);
        }
        edges.push(self.bins.last().unwrap().right);
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.lower,
            self.upper
        )
    }
}
