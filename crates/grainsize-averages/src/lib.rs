//! Descriptive grain size statistics
//!
//! Averages of apparent grain size populations with confidence intervals,
//! plus the sectional-area to equivalent-circular-diameter conversion that
//! precedes every grain size analysis.
//!
//! # Examples
//!
//! ```rust
//! use grainsize_averages::{amean, gmean, AmeanCiMethod};
//!
//! let diameters = vec![12.0, 15.0, 13.5, 18.0, 14.2, 16.1, 15.5, 13.0];
//!
//! let result = amean(&diameters, 0.95, AmeanCiMethod::Astm).unwrap();
//! assert!(result.interval.contains(result.mean));
//!
//! let result = gmean(&diameters, 0.95).unwrap();
//! assert!(result.msd >= 1.0);
//! ```

pub mod conversion;
pub mod intervals;
pub mod means;
pub mod types;

pub use conversion::area_to_diameter;
pub use intervals::{critical_t, critical_z};
pub use means::{
    amean, gmean, median, AmeanCiMethod, GeometricMeanResult, MeanResult, MedianResult,
};
pub use types::ConfidenceInterval;

pub use grainsize_core::{Error, Result};
