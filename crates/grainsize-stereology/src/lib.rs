//! Stereological estimation of 3D grain size distributions
//!
//! A planar section through a population of 3D grains systematically biases
//! the observed sizes downward: large grains are rarely cut through their
//! centers. This crate recovers the actual (3D) distribution from the
//! apparent (2D) one:
//!
//! - [`wicksell::section_probability`] — the cross-section probability of a
//!   sphere (Wicksell, 1925)
//! - [`unfold_population`] — the Saltykov class-by-class inversion
//! - [`VolumeCdf`] — volume-weighted cumulative distribution and
//!   "volume fraction below X" queries
//! - [`calc_shape`] — the two-step lognormal shape estimator
//! - [`saltykov`] — the assembled pipeline
//!
//! # Examples
//!
//! ```rust
//! use grainsize_stereology::{saltykov, SaltykovConfig};
//!
//! let diameters = vec![5.0, 8.0, 10.0, 10.0, 12.0, 15.0, 15.0, 15.0, 20.0, 25.0];
//! let result = saltykov(&diameters, &SaltykovConfig::with_count(5)).unwrap();
//!
//! // The unfolded frequencies are a density over the class range
//! let integral: f64 = result.frequencies.iter().sum::<f64>() * result.bin_width;
//! assert!((integral - 1.0).abs() < 1e-9);
//!
//! // Volume fraction of grains up to 20 microns
//! let fraction = result.volume_fraction_below(20.0);
//! assert!((0.0..=100.0).contains(&fraction));
//! ```

pub mod fit;
pub mod pipeline;
pub mod twostep;
pub mod unfold;
pub mod volume;
pub mod wicksell;

pub use fit::{fit_lognormal, lognormal_density, LognormalFit, SHAPE_BOUNDS};
pub use pipeline::{saltykov, SaltykovConfig, SaltykovResult};
pub use twostep::{calc_shape, ClassRange, FitCurve, TwoStepResult};
pub use unfold::{unfold_population, UnfoldedDistribution};
pub use volume::VolumeCdf;
pub use wicksell::section_probability;

pub use grainsize_core::{Error, Result};
