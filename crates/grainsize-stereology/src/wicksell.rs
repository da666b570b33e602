//! Wicksell cross-section probability
//!
//! The geometric probability that a sphere cut by a random plane produces a
//! cross-section of a given size, after Wicksell (1925), Scheil (1931),
//! Schwartz (1934), and Saltykov (1967).

/// Probability that a sphere of diameter `d` produces a planar cross-section
/// with diameter in `[d1, d2]`:
///
/// ```text
/// P(r1 < r < r2) = 1/R * (sqrt(R^2 - r1^2) - sqrt(R^2 - r2^2))
/// ```
///
/// where `R = d/2` and `r1 = d1/2`, `r2 = d2/2` bound the class. The caller
/// guarantees `d >= d2 >= d1 >= 0` through its class ordering; radicands are
/// clamped at zero so that rounding noise at `d == d2` cannot produce NaN.
pub fn section_probability(d: f64, d1: f64, d2: f64) -> f64 {
    let r = d / 2.0;
    let r1 = d1 / 2.0;
    let r2 = d2 / 2.0;

    ((r * r - r1 * r1).max(0.0).sqrt() - (r * r - r2 * r2).max(0.0).sqrt()) / r
}
