use approx::assert_relative_eq;
use crescere_lms::{LmsParams, ZScoreMethod, z_score_bounded, z_score_standard};

/// Weight-for-age, girls, day 0.
fn girls_wfa() -> LmsParams {
    LmsParams::new(0.3809, 3.2322, 0.14171).unwrap()
}

#[test]
fn one_sd_of_extrapolation_per_sd_spacing() {
    let p = girls_wfa();
    let spacing = p.value_at(3.0) - p.value_at(2.0);
    let v = p.value_at(3.0) + 2.0 * spacing;
    assert_relative_eq!(z_score_bounded(v, &p), 5.0, epsilon = 1e-9);
}

#[test]
fn one_sd_of_extrapolation_below() {
    let p = girls_wfa();
    let spacing = p.value_at(-2.0) - p.value_at(-3.0);
    let v = p.value_at(-3.0) - 0.5 * spacing;
    assert_relative_eq!(z_score_bounded(v, &p), -3.5, epsilon = 1e-9);
}

#[test]
fn bounded_and_standard_agree_at_cutoffs() {
    let p = girls_wfa();
    for z in [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0] {
        let v = p.value_at(z);
        assert_relative_eq!(z_score_bounded(v, &p), z, epsilon = 1e-9);
        assert_relative_eq!(z_score_standard(v, &p), z, epsilon = 1e-9);
    }
}

#[test]
fn bounded_is_less_extreme_than_box_cox_on_the_heavy_side() {
    // With L > 0 Box-Cox compresses the heavy tail; the restricted score
    // does not.
    let p = girls_wfa();
    let v = p.value_at(3.0) * 1.3;
    let raw = p.z_score(ZScoreMethod::Standard, v);
    let bounded = p.z_score(ZScoreMethod::Bounded, v);
    assert!(raw > 3.0 && bounded > 3.0);
    assert!(bounded > raw);
}

#[test]
fn degenerate_lambda_bounded_is_finite() {
    let p = LmsParams::new(0.0, 10.0, 0.12).unwrap();
    for v in [3.0, 7.0, 10.0, 14.0, 30.0] {
        assert!(z_score_bounded(v, &p).is_finite(), "non-finite at {v}");
    }
}
