//! Reference curves: the measurement value at a fixed z-score over age.

use crescere_age::DAYS_PER_MONTH;
use crescere_reference::{AgeIndicator, ReferenceSet, Sex};
use serde::Serialize;

/// One point of a reference curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Age in days.
    pub day: u32,
    /// Value at the curve's z-score, in the table's unit (kg or cm).
    pub value: f64,
}

/// Age in days at the start of each whole month in `0..=last_month`.
pub fn month_days(last_month: u32) -> impl Iterator<Item = u32> {
    (0..=last_month).map(|month| (f64::from(month) * DAYS_PER_MONTH).round() as u32)
}

/// Values at z-score `z` for each of `days`, skipping days past the end of
/// the table.
pub fn reference_curve(
    refs: &ReferenceSet,
    indicator: AgeIndicator,
    sex: Sex,
    z: f64,
    days: impl IntoIterator<Item = u32>,
) -> Vec<CurvePoint> {
    days.into_iter()
        .filter_map(|day| {
            let lms = refs.age_lms(indicator, sex, day)?;
            Some(CurvePoint {
                day,
                value: lms.value_at(z),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_days_start_at_zero() {
        let days: Vec<u32> = month_days(3).collect();
        assert_eq!(days, vec![0, 30, 61, 91]);
    }

    #[test]
    fn sixty_months() {
        let days: Vec<u32> = month_days(60).collect();
        assert_eq!(days.len(), 61);
        assert_eq!(days[24], 731);
        assert_eq!(days[60], 1826);
    }
}
