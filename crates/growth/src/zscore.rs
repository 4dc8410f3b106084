//! Composite z-scores for one measurement.

use crescere_reference::{AgeIndicator, Indicator, LengthKey, ReferenceSet, Sex};
use serde::Serialize;
use tracing::debug;

use crate::measurement::Measurement;

/// Oldest age in days the age-indexed standards are queried for (5 years).
pub const MAX_AGE_DAYS: f64 = 1826.0;

/// Oldest age in days weight-for-length is computed for (2 years).
pub const WFL_MAX_AGE_DAYS: f64 = 730.0;

/// The four WHO z-scores of a measurement.
///
/// Each field is `None` when its inputs are missing, the age is out of
/// range, or the reference table has no entry for the key.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ZScores {
    /// Weight-for-age.
    pub waz: Option<f64>,
    /// Length/height-for-age.
    pub lhaz: Option<f64>,
    /// Head-circumference-for-age.
    pub headcz: Option<f64>,
    /// Weight-for-length.
    pub wflz: Option<f64>,
}

impl ZScores {
    /// The z-score for one indicator.
    pub fn get(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::WeightForAge => self.waz,
            Indicator::LengthForAge => self.lhaz,
            Indicator::HeadCircumferenceForAge => self.headcz,
            Indicator::WeightForLength => self.wflz,
        }
    }

    /// All four z-scores in `waz`, `lhaz`, `headcz`, `wflz` order.
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, Option<f64>)> + '_ {
        Indicator::ALL.into_iter().map(move |i| (i, self.get(i)))
    }

    /// `true` when no z-score could be computed.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, z)| z.is_none())
    }
}

/// Compute the four z-scores of `measurement` for a child of `sex` aged
/// `age_in_days`.
///
/// Ages outside `[0, 1826]` (or NaN) give an all-`None` result. The age is
/// rounded to the nearest day for table lookup, while the 730-day
/// weight-for-length cut-off is applied to the unrounded age. Weight is
/// converted from grams to kilograms.
///
/// # Examples
///
/// ```no_run
/// # use std::path::Path;
/// use chrono::NaiveDate;
/// use crescere_growth::{Measurement, z_scores};
/// use crescere_reference::{LoaderConfig, ReferenceSet, Sex};
///
/// let refs = ReferenceSet::from_dir(Path::new("data/who"), &LoaderConfig::default()).unwrap();
/// let m = Measurement::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).with_weight(3400.0);
/// let z = z_scores(&refs, &m, Sex::Male, 0.0);
/// assert!(z.waz.is_some());
/// assert!(z.lhaz.is_none());
/// ```
pub fn z_scores(
    refs: &ReferenceSet,
    measurement: &Measurement,
    sex: Sex,
    age_in_days: f64,
) -> ZScores {
    if !(0.0..=MAX_AGE_DAYS).contains(&age_in_days) {
        debug!(age_in_days, "age outside reference range");
        return ZScores::default();
    }
    let day = age_in_days.round() as u32;
    let weight_kg = measurement.present_weight().map(|g| g / 1000.0);
    let length = measurement.present_length();

    let wflz = if age_in_days <= WFL_MAX_AGE_DAYS {
        weight_kg
            .zip(length)
            .and_then(|(kg, cm)| weight_for_length(refs, sex, kg, cm))
    } else {
        None
    };

    ZScores {
        waz: age_indexed(refs, AgeIndicator::WeightForAge, sex, day, weight_kg),
        lhaz: age_indexed(refs, AgeIndicator::LengthForAge, sex, day, length),
        headcz: age_indexed(
            refs,
            AgeIndicator::HeadCircumferenceForAge,
            sex,
            day,
            measurement.present_head_circ(),
        ),
        wflz,
    }
}

/// Like [`z_scores`], with sex given as a WHO code (1 = male, 2 = female).
///
/// Any other code gives an all-`None` result.
pub fn z_scores_for_code(
    refs: &ReferenceSet,
    measurement: &Measurement,
    sex_code: u8,
    age_in_days: f64,
) -> ZScores {
    match Sex::try_from(sex_code) {
        Ok(sex) => z_scores(refs, measurement, sex, age_in_days),
        Err(e) => {
            debug!(error = %e, "skipping z-scores");
            ZScores::default()
        }
    }
}

fn age_indexed(
    refs: &ReferenceSet,
    indicator: AgeIndicator,
    sex: Sex,
    day: u32,
    value: Option<f64>,
) -> Option<f64> {
    let value = value?;
    let Some(lms) = refs.age_lms(indicator, sex, day) else {
        debug!(%indicator, %sex, day, "no reference entry");
        return None;
    };
    Some(lms.z_score(indicator.method(), value))
}

fn weight_for_length(refs: &ReferenceSet, sex: Sex, weight_kg: f64, length_cm: f64) -> Option<f64> {
    let key = LengthKey::from_cm(length_cm)?;
    let Some(lms) = refs.length_lms(sex, key) else {
        debug!(%sex, length = %key, "no weight-for-length entry");
        return None;
    };
    Some(lms.z_score(Indicator::WeightForLength.method(), weight_kg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_matches_fields() {
        let z = ZScores {
            waz: Some(1.0),
            lhaz: Some(2.0),
            headcz: None,
            wflz: Some(-1.0),
        };
        assert_eq!(z.get(Indicator::WeightForAge), Some(1.0));
        assert_eq!(z.get(Indicator::LengthForAge), Some(2.0));
        assert_eq!(z.get(Indicator::HeadCircumferenceForAge), None);
        assert_eq!(z.get(Indicator::WeightForLength), Some(-1.0));
    }

    #[test]
    fn iter_order() {
        let order: Vec<_> = ZScores::default().iter().map(|(i, _)| i).collect();
        assert_eq!(order, Indicator::ALL.to_vec());
    }

    #[test]
    fn default_is_empty() {
        assert!(ZScores::default().is_empty());
        let z = ZScores {
            headcz: Some(0.0),
            ..ZScores::default()
        };
        assert!(!z.is_empty());
    }

    #[test]
    fn serializes_nulls() {
        let json = serde_json::to_string(&ZScores {
            waz: Some(0.5),
            ..ZScores::default()
        })
        .unwrap();
        assert_eq!(json, r#"{"waz":0.5,"lhaz":null,"headcz":null,"wflz":null}"#);
    }
}
