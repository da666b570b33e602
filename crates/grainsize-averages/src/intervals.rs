//! Critical values for confidence interval construction

use grainsize_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Validate a confidence level
pub fn check_level(level: f64) -> Result<()> {
    if !(level > 0.0 && level < 1.0) {
        return Err(Error::invalid_confidence(level));
    }
    Ok(())
}

/// Two-tailed critical value of the t-distribution with `n - 1` degrees of
/// freedom
pub fn critical_t(confidence: f64, sample_size: usize) -> Result<f64> {
    check_level(confidence)?;
    if sample_size < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: sample_size,
        });
    }

    let df = (sample_size - 1) as f64;
    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("Failed to create t-distribution: {e}")))?;

    let alpha = 1.0 - confidence;
    Ok(t_dist.inverse_cdf(1.0 - alpha / 2.0))
}

/// Two-tailed critical value of the standard normal distribution
pub fn critical_z(confidence: f64) -> Result<f64> {
    check_level(confidence)?;

    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {e}")))?;

    let alpha = 1.0 - confidence;
    Ok(normal.inverse_cdf(1.0 - alpha / 2.0))
}
