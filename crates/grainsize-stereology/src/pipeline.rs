//! Saltykov pipeline orchestration
//!
//! Assembles histogram construction, population unfolding, and the
//! volume-weighted cumulative distribution into the single entry point most
//! callers want. Presentation concerns (plots, printouts, file export) are
//! left to the caller; everything here returns structured values.

use crate::unfold::unfold_population;
use crate::volume::VolumeCdf;
use grainsize_core::Result;
use grainsize_histogram::{BinSpec, DensityHistogramBuilder, HistogramBuilder, LeftEdge};

/// Configuration of a Saltykov run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaltykovConfig {
    /// How the histogram classes are determined (default: 10 classes)
    pub bins: BinSpec,
    /// Where the histogram range starts (default: zero)
    pub left_edge: LeftEdge,
}

impl Default for SaltykovConfig {
    fn default() -> Self {
        Self {
            bins: BinSpec::FixedCount(10),
            left_edge: LeftEdge::Zero,
        }
    }
}

impl SaltykovConfig {
    /// Configuration with a fixed number of classes and a zero left edge
    pub fn with_count(numbins: usize) -> Self {
        Self {
            bins: BinSpec::FixedCount(numbins),
            ..Self::default()
        }
    }
}

/// Result of a Saltykov run
#[derive(Debug, Clone, PartialEq)]
pub struct SaltykovResult {
    /// Edges of the histogram classes (`numbins + 1` values)
    pub bin_edges: Vec<f64>,
    /// Class midpoints (microns)
    pub mid_points: Vec<f64>,
    /// Unfolded 3D frequencies (density per class)
    pub frequencies: Vec<f64>,
    /// The uniform class width
    pub bin_width: f64,
    /// Negative probability mass discarded by the unfolding clip step
    pub clipped_mass: f64,
    /// Volume-weighted cumulative distribution over the classes
    pub cumulative_volume: VolumeCdf,
}

impl SaltykovResult {
    /// Volume fraction (percent) of grains up to the given diameter
    pub fn volume_fraction_below(&self, diameter: f64) -> f64 {
        self.cumulative_volume.fraction_below(diameter)
    }
}

/// Estimate the actual (3D) grain size distribution from apparent diameters
///
/// The Saltykov method is optimal to estimate the volume of a particular
/// grain size fraction and to get a qualitative view of the actual
/// population, in both uni- and multimodal cases.
pub fn saltykov(diameters: &[f64], config: &SaltykovConfig) -> Result<SaltykovResult> {
    let histogram = DensityHistogramBuilder::new(config.bins)
        .left_edge(config.left_edge)
        .build(diameters)?;

    let unfolded = unfold_population(&histogram)?;
    let cumulative_volume = VolumeCdf::from_unfolded(&unfolded)?;

    Ok(SaltykovResult {
        bin_edges: histogram.edges(),
        mid_points: unfolded.mid_points,
        frequencies: unfolded.frequencies,
        bin_width: unfolded.bin_width,
        clipped_mass: unfolded.clipped_mass,
        cumulative_volume,
    })
}
