//! Z-scores for a child's full measurement history.

use chrono::NaiveDate;
use crescere_age::{age_in_days, parse_date};
use crescere_reference::{ReferenceSet, Sex};
use serde::Serialize;

use crate::error::GrowthError;
use crate::measurement::Measurement;
use crate::zscore::{ZScores, z_scores};

/// One measurement with its age and z-scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// The measurement as recorded.
    pub measurement: Measurement,
    /// Age in days on the measurement date; negative if before birth.
    pub age_in_days: i64,
    /// Z-scores at that age.
    pub z_scores: ZScores,
}

/// Assess every measurement of a child born on `birth`, oldest first.
///
/// Measurements dated before birth are kept with empty z-scores.
pub fn assess(
    refs: &ReferenceSet,
    birth: NaiveDate,
    sex: Sex,
    measurements: &[Measurement],
) -> Vec<Assessment> {
    let mut out: Vec<Assessment> = measurements
        .iter()
        .map(|m| {
            let age = age_in_days(birth, m.date);
            Assessment {
                measurement: m.clone(),
                age_in_days: age,
                z_scores: z_scores(refs, m, sex, age as f64),
            }
        })
        .collect();
    out.sort_by_key(|a| a.measurement.date);
    out
}

/// Like [`assess`], with the birth date as `YYYY-MM-DD` and sex as a WHO
/// code.
///
/// # Errors
///
/// Returns [`GrowthError::Date`] for an unparsable birth date and
/// [`GrowthError::Reference`] for a sex code other than 1 or 2.
pub fn assess_iso(
    refs: &ReferenceSet,
    birth: &str,
    sex_code: u8,
    measurements: &[Measurement],
) -> Result<Vec<Assessment>, GrowthError> {
    let birth = parse_date(birth)?;
    let sex = Sex::try_from(sex_code)?;
    Ok(assess(refs, birth, sex, measurements))
}
