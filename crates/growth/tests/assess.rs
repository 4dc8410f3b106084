mod common;

use approx::assert_relative_eq;
use common::{WFA_MALE, date, references};
use crescere_growth::{
    GrowthError, Measurement, assess, assess_iso, month_days, reference_curve, z_scores,
};
use crescere_reference::{AgeIndicator, Sex};

#[test]
fn history_is_sorted_and_aged() {
    let refs = references();
    let ms = vec![
        Measurement::new(date("2024-03-01")).with_weight(5200.0),
        Measurement::new(date("2024-01-01")).with_weight(3400.0),
        Measurement::new(date("2024-01-31")).with_weight(4000.0),
    ];
    let out = assess(&refs, date("2024-01-01"), Sex::Male, &ms);
    let ages: Vec<i64> = out.iter().map(|a| a.age_in_days).collect();
    assert_eq!(ages, vec![0, 30, 60]);
    assert_eq!(out[2].z_scores, z_scores(&refs, &ms[0], Sex::Male, 60.0));
}

#[test]
fn measurement_before_birth_has_no_scores() {
    let refs = references();
    let ms = vec![Measurement::new(date("2023-12-25")).with_weight(3400.0)];
    let out = assess(&refs, date("2024-01-01"), Sex::Female, &ms);
    assert_eq!(out[0].age_in_days, -7);
    assert!(out[0].z_scores.is_empty());
}

#[test]
fn iso_entry_point_validates() {
    let refs = references();
    let ms = vec![Measurement::new(date("2024-01-01")).with_weight(3400.0)];
    assert_eq!(assess_iso(&refs, "2024-01-01", 1, &ms).unwrap().len(), 1);
    assert!(matches!(
        assess_iso(&refs, "01/01/2024", 1, &ms),
        Err(GrowthError::Date(_))
    ));
    assert!(matches!(
        assess_iso(&refs, "2024-01-01", 7, &ms),
        Err(GrowthError::Reference(_))
    ));
}

#[test]
fn median_curve_follows_m() {
    let refs = references();
    let curve = reference_curve(&refs, AgeIndicator::WeightForAge, Sex::Male, 0.0, month_days(60));
    assert_eq!(curve.len(), 61);
    for point in &curve {
        assert_relative_eq!(point.value, WFA_MALE.1, epsilon = 1e-12);
    }
}

#[test]
fn curve_skips_days_past_table() {
    let refs = references();
    let curve = reference_curve(
        &refs,
        AgeIndicator::LengthForAge,
        Sex::Female,
        2.0,
        [0, 1856, 1857, 5000],
    );
    assert_eq!(curve.len(), 2);
    assert!(curve[0].value > 49.1477);
}
