//! Box-Cox z-score transforms.

use serde::Serialize;

use crate::params::LmsParams;

/// Boundary beyond which the bounded transform switches to linear
/// extrapolation.
const BOUND: f64 = 3.0;

/// Which transform to apply for an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZScoreMethod {
    /// Direct LMS formula. Used for length- and head-circumference-for-age.
    Standard,
    /// Direct LMS formula inside ±3 SD, linear extrapolation outside.
    /// Used for weight-for-age and weight-for-length.
    Bounded,
}

/// Direct LMS z-score.
///
/// ```text
/// |L| < 0.001:  z = ln(value / M) / S
/// otherwise:    z = ((value / M)^L - 1) / (L * S)
/// ```
pub fn z_score_standard(value: f64, params: &LmsParams) -> f64 {
    let (l, m, s) = (params.l(), params.m(), params.s());
    if params.is_log_normal() {
        (value / m).ln() / s
    } else {
        ((value / m).powf(l) - 1.0) / (l * s)
    }
}

/// WHO restricted z-score for weight indicators.
///
/// Inside [-3, 3] this equals [`z_score_standard`]. Beyond +3 the distance
/// past the +3 SD value is measured in units of the (+3 SD − +2 SD) spacing,
/// and symmetrically below -3 using the (−2 SD − −3 SD) spacing. The result
/// is continuous at ±3 and strictly monotone in `value`.
pub fn z_score_bounded(value: f64, params: &LmsParams) -> f64 {
    let z = z_score_standard(value, params);
    if (-BOUND..=BOUND).contains(&z) {
        return z;
    }

    if z > BOUND {
        let sd2pos = params.value_at(2.0);
        let sd3pos = params.value_at(3.0);
        BOUND + (value - sd3pos) / (sd3pos - sd2pos)
    } else {
        // NaN also lands here and stays NaN.
        let sd2neg = params.value_at(-2.0);
        let sd3neg = params.value_at(-3.0);
        -BOUND - ((value - sd3neg) / (sd2neg - sd3neg)).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wfa() -> LmsParams {
        LmsParams::new(0.3487, 3.3464, 0.14602).unwrap()
    }

    #[test]
    fn standard_zero_at_median() {
        let p = LmsParams::new(1.0, 49.8842, 0.03795).unwrap();
        assert_eq!(z_score_standard(49.8842, &p), 0.0);
    }

    #[test]
    fn standard_known_values() {
        let lfa = LmsParams::new(1.0, 49.8842, 0.03795).unwrap();
        assert_relative_eq!(z_score_standard(50.0, &lfa), 0.06116933616675275, epsilon = 1e-12);
        let hc = LmsParams::new(1.0, 34.4618, 0.03686).unwrap();
        assert_relative_eq!(z_score_standard(35.0, &hc), 0.42369213755272295, epsilon = 1e-12);
    }

    #[test]
    fn standard_log_normal_branch() {
        let p = LmsParams::new(0.0005, 3.0, 0.1).unwrap();
        assert_relative_eq!(z_score_standard(3.3, &p), (1.1_f64).ln() / 0.1, epsilon = 1e-12);
    }

    #[test]
    fn bounded_matches_standard_inside_range() {
        let p = wfa();
        assert_relative_eq!(z_score_bounded(3.4, &p), 0.10912474665759195, epsilon = 1e-12);
        for v in [2.2, 2.8, 3.3464, 4.0, 4.9] {
            assert_eq!(z_score_bounded(v, &p), z_score_standard(v, &p));
        }
    }

    #[test]
    fn bounded_extrapolates_above() {
        let p = wfa();
        assert_relative_eq!(z_score_bounded(6.0, &p), 4.585774285207116, epsilon = 1e-9);
        assert!(z_score_standard(6.0, &p) < z_score_bounded(6.0, &p));
    }

    #[test]
    fn bounded_extrapolates_below() {
        let p = wfa();
        assert_relative_eq!(z_score_bounded(1.5, &p), -4.53113649167937, epsilon = 1e-9);
    }

    #[test]
    fn bounded_continuous_at_plus_three() {
        let p = wfa();
        let sd3 = p.value_at(3.0);
        let inside = z_score_bounded(sd3 - 1e-9, &p);
        let outside = z_score_bounded(sd3 + 1e-9, &p);
        assert_relative_eq!(inside, 3.0, epsilon = 1e-6);
        assert_relative_eq!(outside, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn bounded_continuous_at_minus_three() {
        let p = wfa();
        let sd3 = p.value_at(-3.0);
        let inside = z_score_bounded(sd3 + 1e-9, &p);
        let outside = z_score_bounded(sd3 - 1e-9, &p);
        assert_relative_eq!(inside, -3.0, epsilon = 1e-6);
        assert_relative_eq!(outside, -3.0, epsilon = 1e-6);
    }

    #[test]
    fn bounded_monotone_across_range() {
        let p = wfa();
        let mut prev = f64::NEG_INFINITY;
        let mut v = 1.0;
        while v < 8.0 {
            let z = z_score_bounded(v, &p);
            assert!(z > prev, "not monotone at {v}: {z} <= {prev}");
            prev = z;
            v += 0.05;
        }
    }

    #[test]
    fn bounded_below_never_above_minus_three() {
        let p = wfa();
        for v in [0.5, 1.0, 1.5, 2.0] {
            assert!(z_score_bounded(v, &p) <= -3.0);
        }
    }

    #[test]
    fn bounded_negative_lambda() {
        // Weight-for-length, boys, 45.0 cm.
        let p = LmsParams::new(-0.3521, 2.441, 0.09182).unwrap();
        assert_eq!(z_score_bounded(2.441, &p), 0.0);
        assert!(z_score_bounded(4.0, &p) > 3.0);
        assert!(z_score_bounded(1.6, &p) < -3.0);
    }

    #[test]
    fn method_dispatch() {
        let p = wfa();
        assert_eq!(p.z_score(ZScoreMethod::Standard, 6.0), z_score_standard(6.0, &p));
        assert_eq!(p.z_score(ZScoreMethod::Bounded, 6.0), z_score_bounded(6.0, &p));
    }
}
