//! Common types for confidence intervals

use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    ///
    /// For asymmetric intervals (geometric mean, modified Cox) this is the
    /// half-width, not the distance to the estimate.
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interval_accessors() {
        let ci = ConfidenceInterval::new(8.0, 12.0, 10.0, 0.95);
        assert_relative_eq!(ci.width(), 4.0);
        assert_relative_eq!(ci.margin_of_error(), 2.0);
        assert!(ci.contains(10.0));
        assert!(ci.contains(8.0));
        assert!(!ci.contains(12.5));
    }

    #[test]
    fn test_display() {
        let ci = ConfidenceInterval::new(8.0, 12.0, 10.0, 0.95);
        let text = ci.to_string();
        assert!(text.contains("95.0% CI"));
    }
}
