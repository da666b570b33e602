//! Volume-weighted cumulative distribution
//!
//! Converts the unfolded class frequencies into the cumulative fraction of
//! total grain volume below a diameter threshold, and answers interpolated
//! "volume fraction up to X microns" queries.

use crate::unfold::UnfoldedDistribution;
use grainsize_core::{Error, Result};
use std::f64::consts::PI;

/// Volume-weighted cumulative distribution over the unfolded classes
///
/// Percentages are non-decreasing, bounded by `[0, 100]`, and end exactly
/// at 100.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeCdf {
    mid_points: Vec<f64>,
    percents: Vec<f64>,
}

impl VolumeCdf {
    /// Build the cumulative volume distribution from an unfolded population
    ///
    /// Each class contributes its probability mass (`frequency * bin_width`)
    /// times the volume of a sphere at the class midpoint, `(pi/6) * d^3`.
    /// The constant factor cancels in the rescale to percent.
    pub fn from_unfolded(unfolded: &UnfoldedDistribution) -> Result<Self> {
        if unfolded.mid_points.is_empty() {
            return Err(Error::InvalidInput(
                "cannot build a volume CDF from an empty distribution".to_string(),
            ));
        }

        let mut cumulative = Vec::with_capacity(unfolded.mid_points.len());
        let mut running = 0.0;
        for (d, f) in unfolded.mid_points.iter().zip(&unfolded.frequencies) {
            let volume = PI / 6.0 * d.powi(3);
            running += volume * f * unfolded.bin_width;
            cumulative.push(running);
        }

        let total = *cumulative.last().unwrap();
        if total <= 0.0 {
            return Err(Error::Computation(
                "total grain volume is zero; cannot normalize the volume CDF".to_string(),
            ));
        }

        let mut percents: Vec<f64> = cumulative.iter().map(|c| 100.0 * c / total).collect();
        // Pin the endpoint against accumulated rounding
        if let Some(last) = percents.last_mut() {
            *last = 100.0;
        }

        Ok(Self {
            mid_points: unfolded.mid_points.clone(),
            percents,
        })
    }

    /// Class midpoints (microns)
    pub fn mid_points(&self) -> &[f64] {
        &self.mid_points
    }

    /// Cumulative volume percentages per class
    pub fn percents(&self) -> &[f64] {
        &self.percents
    }

    /// Volume fraction (percent) of grains up to the given diameter
    ///
    /// Linearly interpolates between the bracketing class midpoints.
    /// Queries at or beyond the largest midpoint report exactly 100%;
    /// queries at or below the smallest midpoint report 0% (the
    /// distribution is not resolved below its first class). Results are
    /// clamped to `[0, 100]`.
    pub fn fraction_below(&self, diameter: f64) -> f64 {
        let first = self.mid_points[0];
        let last = self.mid_points[self.mid_points.len() - 1];

        if diameter >= last {
            return 100.0;
        }
        if diameter <= first {
            return 0.0;
        }

        // First midpoint strictly greater than the query
        let index = self
            .mid_points
            .iter()
            .position(|&m| m > diameter)
            .unwrap_or(self.mid_points.len() - 1);

        let (x0, x1) = (self.mid_points[index - 1], self.mid_points[index]);
        let (y0, y1) = (self.percents[index - 1], self.percents[index]);
        let slope = (y1 - y0) / (x1 - x0);

        (y0 + slope * (diameter - x0)).clamp(0.0, 100.0)
    }
}
