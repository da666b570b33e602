//! Sectional area to equivalent circular diameter conversion

use grainsize_core::{Error, Result};
use std::f64::consts::PI;

/// Calculate equivalent circular diameters from sectional areas
///
/// `d = 2 * sqrt(area / pi)`, optionally adding the width of the grain
/// boundaries to correct the diameters (grain boundary pixels are usually
/// assigned to neither neighbor during segmentation).
pub fn area_to_diameter(areas: &[f64], boundary_correction: Option<f64>) -> Result<Vec<f64>> {
    if areas.is_empty() {
        return Err(Error::empty_input());
    }
    if areas.iter().any(|a| !a.is_finite()) {
        return Err(Error::non_finite("areas"));
    }
    if areas.iter().any(|&a| a <= 0.0) {
        return Err(Error::non_positive("areas"));
    }

    let correction = match boundary_correction {
        Some(width) if !width.is_finite() || width < 0.0 => {
            return Err(Error::InvalidParameter(format!(
                "boundary correction {width} must be a non-negative finite scalar"
            )));
        }
        Some(width) => width,
        None => 0.0,
    };

    Ok(areas
        .iter()
        .map(|&area| 2.0 * (area / PI).sqrt() + correction)
        .collect())
}
