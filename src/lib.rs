//! Grain size characterization from thin sections
//!
//! A toolkit for quantifying grain size in polycrystalline materials from
//! planar sections:
//!
//! - [`histogram`] — density histograms of apparent diameters with typed
//!   binning rules
//! - [`stereology`] — the Saltykov unfolding of apparent (2D) sizes into
//!   the actual (3D) distribution, volume-fraction queries, and the
//!   two-step lognormal shape estimator
//! - [`averages`] — descriptive statistics (arithmetic/geometric mean,
//!   median) with confidence intervals, and area-to-diameter conversion
//! - [`piezometry`] — differential stress estimates from recrystallized
//!   grain size
//! - [`export`] — delimited-text export of Saltykov results
//!
//! # Examples
//!
//! ```rust
//! use grainsize::{saltykov, SaltykovConfig};
//!
//! let diameters = vec![5.0, 8.0, 10.0, 10.0, 12.0, 15.0, 15.0, 15.0, 20.0, 25.0];
//! let result = saltykov(&diameters, &SaltykovConfig::with_count(5)).unwrap();
//!
//! println!("bin size = {:.2}", result.bin_width);
//! println!("volume below 20 microns = {:.2} %", result.volume_fraction_below(20.0));
//! ```

pub use grainsize_averages as averages;
pub use grainsize_histogram as histogram;
pub use grainsize_piezometry as piezometry;
pub use grainsize_stereology as stereology;

pub use grainsize_core::sample;

pub mod export;

// The entry points most analyses need
pub use grainsize_core::{Error, Result};
pub use grainsize_stereology::{
    calc_shape, saltykov, ClassRange, SaltykovConfig, SaltykovResult, TwoStepResult,
};
