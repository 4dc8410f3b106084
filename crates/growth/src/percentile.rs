//! Conversion between z-scores and percentiles of the standard normal.

use std::f64::consts::SQRT_2;

use statrs::function::erf::{erfc, erfc_inv};

/// Percentile (0..100) of a z-score: `100 · Φ(z)`.
///
/// Computed through the complementary error function, which keeps full
/// precision in both tails. `None` or NaN in gives `None` out.
pub fn percentile_from_z(z: Option<f64>) -> Option<f64> {
    let z = z.filter(|z| !z.is_nan())?;
    Some(50.0 * erfc(-z / SQRT_2))
}

/// Z-score at a percentile strictly between 0 and 100.
pub fn z_from_percentile(percentile: f64) -> Option<f64> {
    if !(percentile > 0.0 && percentile < 100.0) {
        return None;
    }
    Some(-SQRT_2 * erfc_inv(percentile / 50.0))
}
