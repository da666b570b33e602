//! Paleopiezometry estimates based on dynamically recrystallized grain size
//!
//! A piezometer is an empirical power law relating the average
//! recrystallized grain size of a mineral to the differential stress it
//! deformed under: `sigma_d = B * d^-m`. Every calibration expects a
//! specific grain size average (see [`GrainSizeMeasure`]); entering a
//! different average gives systematically wrong stresses.
//!
//! # Examples
//!
//! ```rust
//! use grainsize_piezometry::{QuartzCalibration, StressOptions};
//!
//! let piezometer = QuartzCalibration::StippTullis.piezometer();
//! let stress = piezometer
//!     .differential_stress(25.0, &StressOptions::default())
//!     .unwrap();
//! // 669 * 25^-0.79 in MPa
//! assert!((stress - 52.0).abs() < 1.0);
//! ```

pub mod database;

use grainsize_core::{Error, Result};

pub use database::{CalciteCalibration, OlivineCalibration, QuartzCalibration};

/// The grain size average a calibration was built against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrainSizeMeasure {
    /// Root mean square of the equivalent circular diameters
    RootMeanSquare,
    /// Arithmetic mean of the equivalent circular diameters
    ArithmeticMean,
    /// Median of the log-transformed diameters
    LogMedian,
}

/// A piezometric calibration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piezometer {
    /// Human-readable calibration name
    pub name: &'static str,
    /// Material parameter (MPa micron^m)
    pub b: f64,
    /// Stress exponent
    pub m: f64,
    /// The grain size average the calibration expects
    pub measure: GrainSizeMeasure,
    /// Whether the calibration was made against linear-intercept sizes
    pub linear_intercepts: bool,
    /// Correction factor applied by the original authors to intercepts
    pub correction_factor: f64,
    /// Whether the relation carries the Shimizu temperature term
    pub temperature_dependent: bool,
    /// Source publication
    pub reference: &'static str,
}

/// Options for a differential stress estimate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StressOptions {
    /// Apply the `2/sqrt(3)` correction to convert the uniaxial
    /// experimental calibration to plane-strain conditions
    pub plane_strain_correction: bool,
    /// Deformation temperature in degrees Celsius; required by
    /// temperature-dependent calibrations (Shimizu)
    pub temperature_c: Option<f64>,
}

impl Piezometer {
    /// Estimate the differential stress (MPa) from the average grain size
    /// (microns)
    ///
    /// Calibrations built on linear intercepts first convert the entered
    /// equivalent circular diameter with the De Hoff and Rhines (1968)
    /// relation, `d' = (correction_factor / sqrt(4/pi)) * d`.
    pub fn differential_stress(&self, grain_size: f64, options: &StressOptions) -> Result<f64> {
        if !grain_size.is_finite() || grain_size <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "grain size {grain_size} must be a positive finite scalar"
            )));
        }

        let size = if self.linear_intercepts {
            self.correction_factor / (4.0 / std::f64::consts::PI).sqrt() * grain_size
        } else {
            grain_size
        };

        let mut stress = self.b * size.powf(-self.m);

        if self.temperature_dependent {
            let temperature = options.temperature_c.ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "the {} calibration requires a deformation temperature",
                    self.name
                ))
            })?;
            stress *= (698.0 / (temperature + 273.15)).exp();
        }

        if options.plane_strain_correction {
            stress *= 2.0 / 3.0f64.sqrt();
        }

        Ok(stress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_power_law() {
        let piezometer = QuartzCalibration::StippTullis.piezometer();
        let stress = piezometer
            .differential_stress(25.0, &StressOptions::default())
            .unwrap();
        assert_relative_eq!(stress, 669.0 * 25.0f64.powf(-0.79), epsilon = 1e-12);
    }

    #[test]
    fn test_stress_decreases_with_grain_size() {
        let piezometer = CalciteCalibration::RutterSgr.piezometer();
        let fine = piezometer
            .differential_stress(10.0, &StressOptions::default())
            .unwrap();
        let coarse = piezometer
            .differential_stress(100.0, &StressOptions::default())
            .unwrap();
        assert!(fine > coarse);
    }

    #[test]
    fn test_linear_intercept_conversion() {
        let piezometer = QuartzCalibration::Twiss.piezometer();
        let stress = piezometer
            .differential_stress(30.0, &StressOptions::default())
            .unwrap();

        let converted = 1.5 / (4.0 / std::f64::consts::PI).sqrt() * 30.0;
        assert_relative_eq!(stress, 550.0 * converted.powf(-0.68), epsilon = 1e-12);
    }

    #[test]
    fn test_plane_strain_correction() {
        let piezometer = OlivineCalibration::TasakaWet.piezometer();
        let plain = piezometer
            .differential_stress(40.0, &StressOptions::default())
            .unwrap();
        let corrected = piezometer
            .differential_stress(
                40.0,
                &StressOptions {
                    plane_strain_correction: true,
                    temperature_c: None,
                },
            )
            .unwrap();
        assert_relative_eq!(corrected, plain * 2.0 / 3.0f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_shimizu_requires_temperature() {
        let piezometer = QuartzCalibration::Shimizu.piezometer();
        assert!(piezometer
            .differential_stress(20.0, &StressOptions::default())
            .is_err());

        let options = StressOptions {
            plane_strain_correction: false,
            temperature_c: Some(500.0),
        };
        let stress = piezometer.differential_stress(20.0, &options).unwrap();
        let expected = 352.0 * 20.0f64.powf(-0.8) * (698.0 / 773.15_f64).exp();
        assert_relative_eq!(stress, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_grain_size() {
        let piezometer = QuartzCalibration::Holyoke.piezometer();
        assert!(piezometer
            .differential_stress(0.0, &StressOptions::default())
            .is_err());
        assert!(piezometer
            .differential_stress(-5.0, &StressOptions::default())
            .is_err());
        assert!(piezometer
            .differential_stress(f64::NAN, &StressOptions::default())
            .is_err());
    }
}
