//! Synthetic reference tables with WHO day-0 LMS values held constant over
//! age and length, so expected z-scores are easy to derive by hand.

#![allow(dead_code)]

use chrono::NaiveDate;
use crescere_lms::LmsParams;
use crescere_reference::{AgeTable, LengthKey, LengthTable, ReferenceSet, Sex};

pub const LAST_DAY: u32 = 1856;

pub const WFA_MALE: (f64, f64, f64) = (0.3487, 3.3464, 0.14602);
pub const WFA_FEMALE: (f64, f64, f64) = (0.3809, 3.2322, 0.14171);
pub const LFA_MALE: (f64, f64, f64) = (1.0, 49.8842, 0.03795);
pub const LFA_FEMALE: (f64, f64, f64) = (1.0, 49.1477, 0.0379);
pub const HCFA_MALE: (f64, f64, f64) = (1.0, 34.4618, 0.03686);
pub const HCFA_FEMALE: (f64, f64, f64) = (1.0, 33.8787, 0.03496);
pub const WFL_MALE: (f64, f64, f64) = (-0.3521, 2.441, 0.09182);
pub const WFL_FEMALE: (f64, f64, f64) = (-0.3833, 2.4607, 0.09029);

fn lms((l, m, s): (f64, f64, f64)) -> LmsParams {
    LmsParams::new(l, m, s).unwrap()
}

fn age_table(male: (f64, f64, f64), female: (f64, f64, f64)) -> AgeTable {
    let rows = (0..=LAST_DAY).flat_map(|day| {
        [(Sex::Male, day, lms(male)), (Sex::Female, day, lms(female))]
    });
    AgeTable::from_rows(rows).unwrap()
}

fn length_table() -> LengthTable {
    // 45.0 ..= 110.0 cm
    let rows = (450..=1100).flat_map(|tenths| {
        let key = LengthKey::from_tenths(tenths);
        [(Sex::Male, key, lms(WFL_MALE)), (Sex::Female, key, lms(WFL_FEMALE))]
    });
    LengthTable::from_rows(rows).unwrap()
}

pub fn references() -> ReferenceSet {
    ReferenceSet::new(
        age_table(WFA_MALE, WFA_FEMALE),
        age_table(LFA_MALE, LFA_FEMALE),
        age_table(HCFA_MALE, HCFA_FEMALE),
        length_table(),
    )
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}
