//! Saltykov population unfolding
//!
//! Inverts the discretized Wicksell sectioning equation: a histogram of
//! apparent (2D) diameters is transformed into an estimate of the actual
//! (3D) sphere-diameter distribution. Larger spheres contribute
//! cross-sections to every smaller class, so the inversion walks from the
//! largest class downward, subtracting each class's predicted contribution
//! to all strictly smaller classes before shrinking the working window.
//!
//! Following Higgins (2000), the sphere diameter is taken at the midpoint
//! of the current largest class for the redistribution kernel and at its
//! upper edge for the normalizing probability.

use crate::wicksell::section_probability;
use grainsize_core::{Error, Result};
use grainsize_histogram::Histogram;
use tracing::{debug, warn};

/// Clipped-mass fraction above which the input is likely outside the
/// method's valid regime (too few classes or non-unimodal data).
const CLIP_WARN_FRACTION: f64 = 0.05;

/// The unfolded (3D) grain size distribution
///
/// Same binning as the input histogram, but the frequencies describe sphere
/// diameters rather than cross-sections. After normalization all values are
/// non-negative and `sum(frequencies) * bin_width == 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnfoldedDistribution {
    /// Class midpoints (microns)
    pub mid_points: Vec<f64>,
    /// Density of sphere diameters per class
    pub frequencies: Vec<f64>,
    /// The uniform class width
    pub bin_width: f64,
    /// Total negative probability mass discarded by the clipping step
    ///
    /// Transient negative frequencies are expected and clipped to zero; a
    /// large value here means the correction removed substantial mass and
    /// the result should be treated with suspicion.
    pub clipped_mass: f64,
}

/// Unfold a histogram of apparent diameters into the 3D population estimate
///
/// This is numerically well-defined for any positive histogram. Pathological
/// inputs (very few classes, strongly non-unimodal data) can yield a
/// degenerate near-delta output after clipping; that is a known limitation
/// of the method, reported through [`UnfoldedDistribution::clipped_mass`]
/// rather than an error.
pub fn unfold_population(histogram: &Histogram) -> Result<UnfoldedDistribution> {
    if histogram.is_empty() {
        return Err(Error::InvalidInput(
            "cannot unfold an empty histogram".to_string(),
        ));
    }

    let edges = histogram.edges();
    let centers = histogram.centers();
    let bin_width = histogram.bin_width();
    let mut freq = histogram.densities();

    // Backward substitution over a shrinking logical window [0, i]. The
    // subtraction below must see the effects of previous subtractions
    // within the same outer step, hence the in-place updates.
    for i in (1..centers.len()).rev() {
        // Normalizing probability: a sphere whose diameter sits at the
        // upper edge of the current largest class sections into that class.
        let p_i = section_probability(edges[i + 1], edges[i], edges[i + 1]);

        if freq[i] > 0.0 {
            // Redistribution kernel: spheres at the class midpoint project
            // cross-sections into every smaller class.
            let d = centers[i];
            for j in (1..=i).rev() {
                let p_j = section_probability(d, edges[j - 1], edges[j]);
                freq[j - 1] -= p_j * freq[i] / p_i;
            }
        }
        // Classes with no observable mass still shrink the window.
    }

    // Negative frequencies are the accepted bias of the method: clip them,
    // record how much mass was discarded, and renormalize to a density.
    let mut clipped_mass = 0.0;
    let mut total_abs = 0.0;
    for f in &mut freq {
        total_abs += f.abs() * bin_width;
        if *f < 0.0 {
            clipped_mass += -*f * bin_width;
            *f = 0.0;
        }
    }

    if clipped_mass > 0.0 {
        debug!(clipped_mass, "clipped negative frequencies during unfolding");
    }
    if total_abs > 0.0 && clipped_mass / total_abs > CLIP_WARN_FRACTION {
        warn!(
            clipped_mass,
            fraction = clipped_mass / total_abs,
            "unfolding clipped a large amount of negative mass; the input is \
             likely outside the method's valid regime"
        );
    }

    let sum: f64 = freq.iter().sum();
    if sum <= 0.0 {
        return Err(Error::Computation(
            "unfolding produced no positive frequencies".to_string(),
        ));
    }
    for f in &mut freq {
        *f /= sum * bin_width;
    }

    Ok(UnfoldedDistribution {
        mid_points: centers,
        frequencies: freq,
        bin_width,
        clipped_mass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use grainsize_histogram::{DensityHistogramBuilder, Histogram, HistogramBin, HistogramBuilder};

    fn histogram_from_counts(counts: &[usize], width: f64) -> Histogram {
        let total: usize = counts.iter().sum();
        let bins: Vec<HistogramBin> = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                HistogramBin::new(i as f64 * width, (i + 1) as f64 * width, count, total, width)
            })
            .collect();
        let upper = counts.len() as f64 * width;
        Histogram::new(bins, total, 0.0, upper, width)
    }

    #[test]
    fn test_unfolded_density_integrates_to_one() {
        let diameters = vec![5.0, 8.0, 10.0, 10.0, 12.0, 15.0, 15.0, 15.0, 20.0, 25.0];
        let hist = DensityHistogramBuilder::with_count(5).build(&diameters).unwrap();
        let unfolded = unfold_population(&hist).unwrap();

        assert_eq!(unfolded.mid_points, vec![2.5, 7.5, 12.5, 17.5, 22.5]);
        assert_relative_eq!(unfolded.bin_width, 5.0);
        assert!(unfolded.frequencies.iter().all(|&f| f >= 0.0));

        let integral: f64 = unfolded.frequencies.iter().sum::<f64>() * unfolded.bin_width;
        assert_relative_eq!(integral, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mass_in_smallest_class_is_untouched() {
        // All observable mass in the smallest class: nothing to redistribute
        let hist = histogram_from_counts(&[10, 0, 0, 0, 0], 2.0);
        let unfolded = unfold_population(&hist).unwrap();

        assert_relative_eq!(unfolded.frequencies[0], 1.0 / unfolded.bin_width);
        for &f in &unfolded.frequencies[1..] {
            assert_relative_eq!(f, 0.0);
        }
        assert_relative_eq!(unfolded.clipped_mass, 0.0);
    }

    #[test]
    fn test_single_class_histogram() {
        let hist = histogram_from_counts(&[7], 3.0);
        let unfolded = unfold_population(&hist).unwrap();
        assert_relative_eq!(unfolded.frequencies[0], 1.0 / 3.0);
    }

    #[test]
    fn test_unfolding_shifts_mass_upward() {
        // Sectioning biases observations downward, so the corrected
        // distribution must sit at larger diameters than the apparent one.
        let diameters = vec![
            2.0, 3.0, 4.0, 4.0, 5.0, 5.0, 5.0, 6.0, 6.0, 6.0, 7.0, 7.0, 7.0, 7.0, 8.0, 8.0, 8.0,
            9.0, 9.0, 10.0,
        ];
        let hist = DensityHistogramBuilder::with_count(5).build(&diameters).unwrap();
        let unfolded = unfold_population(&hist).unwrap();

        let apparent_mean: f64 = hist
            .centers()
            .iter()
            .zip(hist.densities())
            .map(|(c, f)| c * f * hist.bin_width())
            .sum();
        let unfolded_mean: f64 = unfolded
            .mid_points
            .iter()
            .zip(&unfolded.frequencies)
            .map(|(c, f)| c * f * unfolded.bin_width)
            .sum();

        assert!(unfolded_mean > apparent_mean);
    }

    #[test]
    fn test_empty_histogram_is_rejected() {
        let hist = Histogram::new(vec![], 0, 0.0, 0.0, 0.0);
        assert!(unfold_population(&hist).is_err());
    }
}
