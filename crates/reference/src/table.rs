//! Dense per-sex reference tables.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crescere_lms::LmsParams;

use crate::error::ReferenceError;
use crate::length_key::LengthKey;
use crate::sex::Sex;

// ---------------------------------------------------------------------------
// AgeTable
// ---------------------------------------------------------------------------

/// LMS parameters indexed by sex and integer age in days.
///
/// Each sex covers days `0..=max_day` with no gaps, so a lookup is a plain
/// vector index.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeTable {
    by_sex: [Vec<LmsParams>; 2],
}

impl AgeTable {
    /// Build a table from `(sex, day, lms)` rows in any order.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::DuplicateKey`] if a (sex, day) repeats,
    /// [`ReferenceError::Gap`] if a sex does not cover every day from 0 to
    /// its maximum, and [`ReferenceError::EmptyTable`] if a sex has no rows.
    pub fn from_rows(
        rows: impl IntoIterator<Item = (Sex, u32, LmsParams)>,
    ) -> Result<Self, ReferenceError> {
        let mut maps: [BTreeMap<u32, LmsParams>; 2] = [BTreeMap::new(), BTreeMap::new()];
        for (sex, day, lms) in rows {
            match maps[sex.index()].entry(day) {
                Entry::Occupied(_) => {
                    return Err(ReferenceError::DuplicateKey {
                        sex,
                        key: format!("day {day}"),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(lms);
                }
            }
        }

        let [male, female] = maps;
        Ok(Self {
            by_sex: [dense_days(Sex::Male, male)?, dense_days(Sex::Female, female)?],
        })
    }

    /// LMS parameters for `sex` at `day`, or `None` past the end of the table.
    pub fn get(&self, sex: Sex, day: u32) -> Option<LmsParams> {
        self.by_sex[sex.index()].get(day as usize).copied()
    }

    /// Last day covered for `sex`.
    pub fn max_day(&self, sex: Sex) -> u32 {
        // Never empty: from_rows rejects empty sexes.
        (self.by_sex[sex.index()].len() - 1) as u32
    }

    /// Number of rows for `sex`.
    pub fn len(&self, sex: Sex) -> usize {
        self.by_sex[sex.index()].len()
    }
}

fn dense_days(sex: Sex, rows: BTreeMap<u32, LmsParams>) -> Result<Vec<LmsParams>, ReferenceError> {
    if rows.is_empty() {
        return Err(ReferenceError::EmptyTable { sex });
    }
    let mut dense = Vec::with_capacity(rows.len());
    for (expected, (day, lms)) in (0u32..).zip(rows) {
        if day != expected {
            return Err(ReferenceError::Gap {
                sex,
                expected: format!("day {expected}"),
                found: format!("day {day}"),
            });
        }
        dense.push(lms);
    }
    Ok(dense)
}

// ---------------------------------------------------------------------------
// LengthTable
// ---------------------------------------------------------------------------

/// LMS parameters indexed by sex and length quantised to 0.1 cm.
///
/// Each sex covers a contiguous run of keys in 0.1 cm steps.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthTable {
    by_sex: [BTreeMap<LengthKey, LmsParams>; 2],
}

impl LengthTable {
    /// Build a table from `(sex, key, lms)` rows in any order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AgeTable::from_rows`], with contiguity checked in
    /// 0.1 cm steps from the smallest key.
    pub fn from_rows(
        rows: impl IntoIterator<Item = (Sex, LengthKey, LmsParams)>,
    ) -> Result<Self, ReferenceError> {
        let mut maps: [BTreeMap<LengthKey, LmsParams>; 2] = [BTreeMap::new(), BTreeMap::new()];
        for (sex, key, lms) in rows {
            match maps[sex.index()].entry(key) {
                Entry::Occupied(_) => {
                    return Err(ReferenceError::DuplicateKey {
                        sex,
                        key: format!("{key} cm"),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(lms);
                }
            }
        }

        for sex in Sex::ALL {
            check_contiguous_lengths(sex, &maps[sex.index()])?;
        }
        Ok(Self { by_sex: maps })
    }

    /// LMS parameters for `sex` at exactly `key`.
    pub fn get(&self, sex: Sex, key: LengthKey) -> Option<LmsParams> {
        self.by_sex[sex.index()].get(&key).copied()
    }

    /// Smallest and largest key covered for `sex`.
    pub fn range(&self, sex: Sex) -> Option<(LengthKey, LengthKey)> {
        let map = &self.by_sex[sex.index()];
        Some((*map.keys().next()?, *map.keys().next_back()?))
    }

    /// Number of rows for `sex`.
    pub fn len(&self, sex: Sex) -> usize {
        self.by_sex[sex.index()].len()
    }
}

fn check_contiguous_lengths(
    sex: Sex,
    rows: &BTreeMap<LengthKey, LmsParams>,
) -> Result<(), ReferenceError> {
    let mut keys = rows.keys().copied();
    let Some(mut prev) = keys.next() else {
        return Err(ReferenceError::EmptyTable { sex });
    };
    for key in keys {
        if key != prev.next() {
            return Err(ReferenceError::Gap {
                sex,
                expected: format!("{} cm", prev.next()),
                found: format!("{key} cm"),
            });
        }
        prev = key;
    }
    Ok(())
}
