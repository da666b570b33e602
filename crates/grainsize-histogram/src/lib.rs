//! Density histograms of apparent grain diameters
//!
//! This crate builds the uniform-width density histograms that the
//! stereological unfolding algorithm consumes. Binning choices are typed:
//! a [`BinSpec`] selects between a fixed class count, a fixed class width,
//! or an automatic rule, and a [`LeftEdge`] selects where the range starts.
//! Both are resolved to concrete numbers before any counting happens.
//!
//! # Examples
//!
//! ```rust
//! use grainsize_histogram::{DensityHistogramBuilder, HistogramBuilder};
//!
//! let diameters = vec![5.0, 8.0, 10.0, 10.0, 12.0, 15.0, 15.0, 15.0, 20.0, 25.0];
//! let histogram = DensityHistogramBuilder::with_count(5).build(&diameters).unwrap();
//!
//! assert_eq!(histogram.len(), 5);
//! assert_eq!(histogram.bin_width(), 5.0);
//!
//! // The densities integrate to one over the histogram range
//! let integral: f64 = histogram.densities().iter().sum::<f64>() * histogram.bin_width();
//! assert!((integral - 1.0).abs() < 1e-12);
//! ```
//!
//! Automatic rules follow the usual width formulas:
//!
//! ```rust
//! use grainsize_histogram::{BinSpec, BinningRule, DensityHistogramBuilder, HistogramBuilder, LeftEdge};
//!
//! let diameters = vec![5.0, 8.0, 10.0, 10.0, 12.0, 15.0, 15.0, 15.0, 20.0, 25.0];
//! let histogram = DensityHistogramBuilder::new(BinSpec::Rule(BinningRule::Sturges))
//!     .left_edge(LeftEdge::SampleMin)
//!     .build(&diameters)
//!     .unwrap();
//! assert_eq!(histogram.len(), 5); // ceil(log2(10)) + 1
//! ```

pub mod builders;
pub mod traits;
pub mod types;

pub use builders::{BinSpec, BinningRule, DensityHistogramBuilder, LeftEdge};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

pub use grainsize_core::Result;

/// Build a density histogram with a fixed number of classes over `[0, max]`
pub fn density_histogram(diameters: &[f64], numbins: usize) -> Result<Histogram> {
    DensityHistogramBuilder::with_count(numbins).build(diameters)
}
