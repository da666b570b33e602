//! Published piezometer calibrations
//!
//! Each calibration records the material parameter `B`, the exponent `m`,
//! which grain size average it was calibrated against, and whether it
//! expects linear-intercept grain sizes (in which case equivalent circular
//! diameters are converted with the De Hoff and Rhines (1968) relation).

use crate::{GrainSizeMeasure, Piezometer};

/// Quartz piezometric relations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuartzCalibration {
    /// Stipp and Tullis (2003), regimes 2-3
    StippTullis,
    /// Stipp and Tullis (2003), bulging recrystallization
    StippTullisBlg,
    /// Holyoke and Kronenberg (2010)
    Holyoke,
    /// Holyoke and Kronenberg (2010), bulging recrystallization
    HolyokeBlg,
    /// Cross et al. (2017)
    Cross,
    /// Cross et al. (2017), high-resolution EBSD
    CrossHr,
    /// Shimizu (2008), temperature dependent
    Shimizu,
    /// Twiss (1977), linear intercepts
    Twiss,
}

impl QuartzCalibration {
    pub fn piezometer(self) -> Piezometer {
        match self {
            Self::StippTullis => Piezometer {
                name: "Stipp and Tullis (2003)",
                b: 669.0,
                m: 0.79,
                measure: GrainSizeMeasure::RootMeanSquare,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: false,
                reference: "https://doi.org/10.1029/2003GL018444",
            },
            Self::StippTullisBlg => Piezometer {
                name: "Stipp and Tullis (2003) BLG",
                b: 1264.1,
                m: 1.64,
                measure: GrainSizeMeasure::RootMeanSquare,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: false,
                reference: "https://doi.org/10.1029/2003GL018444",
            },
            Self::Holyoke => Piezometer {
                name: "Holyoke and Kronenberg (2010)",
                b: 490.3,
                m: 0.79,
                measure: GrainSizeMeasure::RootMeanSquare,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: false,
                reference: "https://doi.org/10.1016/j.tecto.2010.08.001",
            },
            Self::HolyokeBlg => Piezometer {
                name: "Holyoke and Kronenberg (2010) BLG",
                b: 883.9,
                m: 1.85,
                measure: GrainSizeMeasure::RootMeanSquare,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: false,
                reference: "https://doi.org/10.1016/j.tecto.2010.08.001",
            },
            Self::Cross => Piezometer {
                name: "Cross et al. (2017)",
                b: 593.0,
                m: 0.71,
                measure: GrainSizeMeasure::RootMeanSquare,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: false,
                reference: "https://doi.org/10.1002/2017GL073836",
            },
            Self::CrossHr => Piezometer {
                name: "Cross et al. (2017) HR",
                b: 450.9,
                m: 0.63,
                measure: GrainSizeMeasure::RootMeanSquare,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: false,
                reference: "https://doi.org/10.1002/2017GL073836",
            },
            Self::Shimizu => Piezometer {
                name: "Shimizu (2008)",
                b: 352.0,
                m: 0.8,
                measure: GrainSizeMeasure::LogMedian,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: true,
                reference: "https://doi.org/10.1016/j.jsg.2008.03.004",
            },
            Self::Twiss => Piezometer {
                name: "Twiss (1977)",
                b: 550.0,
                m: 0.68,
                measure: GrainSizeMeasure::ArithmeticMean,
                linear_intercepts: true,
                correction_factor: 1.5,
                temperature_dependent: false,
                reference: "https://www.doi.org/10.1007/BF01637105",
            },
        }
    }
}

/// Calcite piezometric relations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalciteCalibration {
    /// Rutter (1995), subgrain rotation recrystallization
    RutterSgr,
    /// Rutter (1995), grain boundary migration recrystallization
    RutterGbm,
    /// Barnhoorn et al. (2004)
    Barnhoorn,
    /// Platt and De Bresser (2017)
    PlattBresser,
    /// Valcke et al. (2015)
    Valcke,
}

impl CalciteCalibration {
    pub fn piezometer(self) -> Piezometer {
        match self {
            Self::RutterSgr => Piezometer {
                name: "Rutter (1995) SGR",
                b: 812.83,
                m: 0.88,
                measure: GrainSizeMeasure::ArithmeticMean,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: false,
                reference: "https://doi.org/10.1029/95JB02500",
            },
            Self::RutterGbm => Piezometer {
                name: "Rutter (1995) GBM",
                b: 2691.53,
                m: 0.89,
                measure: GrainSizeMeasure::ArithmeticMean,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: false,
                reference: "https://doi.org/10.1029/95JB02500",
            },
            Self::Barnhoorn => Piezometer {
                name: "Barnhoorn et al. (2004)",
                b: 537.03,
                m: 0.82,
                measure: GrainSizeMeasure::ArithmeticMean,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: false,
                reference: "https://doi.org/10.1016/j.jsg.2003.11.024",
            },
            Self::PlattBresser => Piezometer {
                name: "Platt and De Bresser (2017)",
                b: 538.40,
                m: 0.82,
                measure: GrainSizeMeasure::RootMeanSquare,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: false,
                reference: "https://doi.org/10.1016/j.jsg.2017.10.012",
            },
            Self::Valcke => Piezometer {
                name: "Valcke et al. (2015)",
                b: 1467.92,
                m: 1.67,
                measure: GrainSizeMeasure::ArithmeticMean,
                linear_intercepts: false,
                correction_factor: 1.0,
                temperature_dependent: false,
                reference: "https://doi.org/10.1144/SP409.4",
            },
        }
    }
}

/// Olivine piezometric relations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OlivineCalibration {
    /// Jung and Karato (2001), wet olivine, linear intercepts
    JungKarato,
    /// Van der Wal et al. (1993), wet olivine, linear intercepts
    VanDerWalWet,
    /// Tasaka et al. (2015), wet olivine
    TasakaWet,
}

impl OlivineCalibration {
    pub fn piezometer(self) -> Piezometer {
        match self {
            Self::JungKarato => Piezometer {
                name: "Jung and Karato (2001)",
                b: 5461.03,
                m: 0.85,
                measure: GrainSizeMeasure::ArithmeticMean,
                linear_intercepts: true,
                correction_factor: 1.5,
                temperature_dependent: false,
                reference: "https://doi.org/10.1016/S0191-8141(01)00005-0",
            },
            Self::VanDerWalWet => Piezometer {
                name: "Van der Wal et al. (1993)",
                b: 1355.4,
                m: 0.75,
                measure: GrainSizeMeasure::ArithmeticMean,
                linear_intercepts: true,
                correction_factor: 1.5,
                temperature_dependent: false,
                reference: "https://doi.org/10.1029/93GL01382",
            },
            Self::TasakaWet => Piezometer {
                name: "Tasaka et al. (2015)",
                b: 719.7,
                m: 0.75,
                measure: GrainSizeMeasure::ArithmeticMean,
                linear_intercepts: false,
                correction_factor: 1.2,
                temperature_dependent: false,
                reference: "",
            },
        }
    }
}
