//! Grain size averages with confidence intervals
//!
//! The arithmetic mean is optimal for normal-like populations, the geometric
//! mean for lognormal-like ones, and the median is the robust choice when
//! data contamination is expected. Confidence interval methods follow ASTM
//! E112-12 (t-based central limit theorem), Armstrong (1992) (modified Cox,
//! optimized for lognormal populations), and Hollander and Wolfe (1999)
//! (rank-based rule of thumb for the median).

use crate::intervals::{check_level, critical_t, critical_z};
use crate::types::ConfidenceInterval;
use grainsize_core::sample::{check_diameters, mean, std_dev};
use grainsize_core::{Error, Result};

/// Confidence interval method for the arithmetic mean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmeanCiMethod {
    /// t-based central limit theorem interval (ASTM E112-12)
    #[default]
    Astm,
    /// Modified Cox interval, optimized for lognormal populations
    ModifiedCox,
}

/// Arithmetic mean with spread and interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanResult {
    /// The arithmetic mean
    pub mean: f64,
    /// Bessel-corrected standard deviation
    pub std_dev: f64,
    /// Confidence interval for the mean
    pub interval: ConfidenceInterval,
}

/// Geometric mean with multiplicative spread and interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricMeanResult {
    /// The geometric mean (back-transformed log mean)
    pub gmean: f64,
    /// Multiplicative standard deviation (MSD), always >= 1
    pub msd: f64,
    /// Asymmetric confidence interval for the geometric mean
    pub interval: ConfidenceInterval,
}

/// Median with interquartile range and interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianResult {
    /// The sample median
    pub median: f64,
    /// Interquartile range
    pub iqr: f64,
    /// Rank-based confidence interval for the median
    pub interval: ConfidenceInterval,
}

fn check_input(data: &[f64], confidence: f64) -> Result<()> {
    check_diameters(data)?;
    check_level(confidence)?;
    if data.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Arithmetic mean, Bessel-corrected SD, and confidence interval
pub fn amean(data: &[f64], confidence: f64, method: AmeanCiMethod) -> Result<MeanResult> {
    check_input(data, confidence)?;

    let n = data.len();
    let m = mean(data);
    let sd = std_dev(data);
    let t = critical_t(confidence, n)?;

    let interval = match method {
        AmeanCiMethod::Astm => {
            let err = t * sd / (n as f64).sqrt();
            ConfidenceInterval::new(m - err, m + err, m, confidence)
        }
        AmeanCiMethod::ModifiedCox => {
            let logs: Vec<f64> = data.iter().map(|x| x.ln()).collect();
            let ml = mean(&logs);
            let sl = std_dev(&logs);
            let nf = n as f64;

            let spread = t * (sl / nf.sqrt()) * (1.0 + (sl * sl * nf) / (2.0 * (nf + 1.0))).sqrt();
            let center = ml + 0.5 * sl * sl;
            ConfidenceInterval::new((center - spread).exp(), (center + spread).exp(), m, confidence)
        }
    };

    Ok(MeanResult {
        mean: m,
        std_dev: sd,
        interval,
    })
}

/// Geometric mean, multiplicative SD, and back-transformed confidence
/// interval
///
/// Statistics are computed on the log-transformed data and back-transformed
/// to linear scale, which makes the interval asymmetric about the estimate.
pub fn gmean(data: &[f64], confidence: f64) -> Result<GeometricMeanResult> {
    check_input(data, confidence)?;

    let n = data.len();
    let logs: Vec<f64> = data.iter().map(|x| x.ln()).collect();
    let ml = mean(&logs);
    let sl = std_dev(&logs);

    let gm = ml.exp();
    let msd = sl.exp();

    let t = critical_t(confidence, n)?;
    let err = t * sl / (n as f64).sqrt();
    let interval = ConfidenceInterval::new((ml - err).exp(), (ml + err).exp(), gm, confidence);

    Ok(GeometricMeanResult {
        gmean: gm,
        msd,
        interval,
    })
}

/// Median, interquartile range, and the Hollander and Wolfe (1999)
/// rank-based confidence interval
pub fn median(data: &[f64], confidence: f64) -> Result<MedianResult> {
    check_input(data, confidence)?;

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();

    let med = grainsize_core::sample::median(&sorted);
    let iqr = sorted[(3 * n) / 4] - sorted[n / 4];

    let z = critical_z(confidence)?;
    let nf = n as f64;
    let id_upper = 1.0 + nf / 2.0 + z * nf.sqrt() / 2.0;
    let id_lower = nf / 2.0 - z * nf.sqrt() / 2.0;

    let upper = if (id_upper.ceil() as usize) >= n {
        sorted[n - 1]
    } else {
        sorted[id_upper.ceil() as usize]
    };
    let lower = sorted[id_lower.floor().max(0.0) as usize];

    Ok(MedianResult {
        median: med,
        iqr,
        interval: ConfidenceInterval::new(lower, upper, med, confidence),
    })
}
