//! Sample validation and small closed-form statistics
//!
//! Shared by the histogram, stereology, and averages crates. Spread and
//! log-scale helpers use the Bessel correction (n-1 degrees of freedom).

use crate::error::{Error, Result};

/// Validate a sample of apparent diameters: non-empty, finite, all positive.
pub fn check_diameters(diameters: &[f64]) -> Result<()> {
    if diameters.is_empty() {
        return Err(Error::empty_input());
    }
    if diameters.iter().any(|d| !d.is_finite()) {
        return Err(Error::non_finite("diameters"));
    }
    if diameters.iter().any(|&d| d <= 0.0) {
        return Err(Error::non_positive("diameters"));
    }
    Ok(())
}

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Bessel-corrected sample variance.
pub fn variance(data: &[f64]) -> f64 {
    let m = mean(data);
    let ss: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    ss / (data.len() - 1) as f64
}

/// Bessel-corrected sample standard deviation.
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Standard deviation of the log-transformed data (Bessel corrected).
///
/// Callers must ensure the data is strictly positive.
pub fn log_std_dev(data: &[f64]) -> f64 {
    let logs: Vec<f64> = data.iter().map(|x| x.ln()).collect();
    std_dev(&logs)
}

/// Sample median (average of the two central order statistics for even n).
pub fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Minimum and maximum of a non-empty sample.
pub fn min_max(data: &[f64]) -> (f64, f64) {
    data.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
        (if x < lo { x } else { lo }, if x > hi { x } else { hi })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_check_diameters() {
        assert!(check_diameters(&[1.0, 2.5, 14.0]).is_ok());
        assert!(check_diameters(&[]).is_err());
        assert!(check_diameters(&[1.0, f64::NAN]).is_err());
        assert!(check_diameters(&[1.0, -2.0]).is_err());
        assert!(check_diameters(&[0.0]).is_err());
    }

    #[test]
    fn test_moments() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0);
        // Bessel corrected: ss = 32, n-1 = 7
        assert_relative_eq!(variance(&data), 32.0 / 7.0);
        assert_relative_eq!(std_dev(&data), (32.0f64 / 7.0).sqrt());
    }

    #[test]
    fn test_median() {
        assert_relative_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_relative_eq!(median(&[4.0, 1.0, 2.0, 3.0]), 2.5);
        assert_relative_eq!(median(&[5.0]), 5.0);
    }

    #[test]
    fn test_min_max() {
        let (lo, hi) = min_max(&[3.0, 1.5, 9.0, 2.0]);
        assert_relative_eq!(lo, 1.5);
        assert_relative_eq!(hi, 9.0);
    }

    #[test]
    fn test_log_std_dev_of_constant_is_zero() {
        assert_relative_eq!(log_std_dev(&[4.0, 4.0, 4.0]), 0.0);
    }
}
