//! Parsing of WHO Anthro reference files.
//!
//! The WHO distributes its growth standards as delimited text with one row
//! per (sex, key):
//!
//! ```text
//! sex   age   l        m        s
//! 1     0     0.3487   3.3464   0.14602
//! ```
//!
//! Weight-for-length files use a `length` column instead of `age`. Header
//! names are matched case-insensitively; extra columns such as `loh` or
//! `lorh` are ignored.

use std::io::Read;

use crescere_lms::LmsParams;
use csv::StringRecord;
use serde::Deserialize;

use crate::error::ReferenceError;
use crate::length_key::LengthKey;
use crate::sex::Sex;
use crate::table::{AgeTable, LengthTable};

// ---------------------------------------------------------------------------
// LoaderConfig
// ---------------------------------------------------------------------------

/// File names and delimiter used when loading a [`ReferenceSet`](crate::ReferenceSet)
/// from a directory.
///
/// The [`Default`] matches the WHO Anthro distribution: tab-separated
/// `weianthro.txt`, `lenanthro.txt`, `hcanthro.txt` and `wflanthro.txt`.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    weight_for_age: String,
    length_for_age: String,
    head_circumference_for_age: String,
    weight_for_length: String,
    delimiter: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            weight_for_age: "weianthro.txt".into(),
            length_for_age: "lenanthro.txt".into(),
            head_circumference_for_age: "hcanthro.txt".into(),
            weight_for_length: "wflanthro.txt".into(),
            delimiter: b'\t',
        }
    }
}

impl LoaderConfig {
    /// Set the weight-for-age file name.
    pub fn with_weight_for_age(mut self, name: impl Into<String>) -> Self {
        self.weight_for_age = name.into();
        self
    }

    /// Set the length-for-age file name.
    pub fn with_length_for_age(mut self, name: impl Into<String>) -> Self {
        self.length_for_age = name.into();
        self
    }

    /// Set the head-circumference-for-age file name.
    pub fn with_head_circumference_for_age(mut self, name: impl Into<String>) -> Self {
        self.head_circumference_for_age = name.into();
        self
    }

    /// Set the weight-for-length file name.
    pub fn with_weight_for_length(mut self, name: impl Into<String>) -> Self {
        self.weight_for_length = name.into();
        self
    }

    /// Set the field delimiter (tab by default).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Weight-for-age file name.
    pub fn weight_for_age(&self) -> &str {
        &self.weight_for_age
    }

    /// Length-for-age file name.
    pub fn length_for_age(&self) -> &str {
        &self.length_for_age
    }

    /// Head-circumference-for-age file name.
    pub fn head_circumference_for_age(&self) -> &str {
        &self.head_circumference_for_age
    }

    /// Weight-for-length file name.
    pub fn weight_for_length(&self) -> &str {
        &self.weight_for_length
    }

    /// Field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct AgeRecord {
    sex: u8,
    #[serde(alias = "day")]
    age: u32,
    l: f64,
    m: f64,
    s: f64,
}

#[derive(Debug, Deserialize)]
struct LengthRecord {
    sex: u8,
    #[serde(alias = "height")]
    length: String,
    l: f64,
    m: f64,
    s: f64,
}

fn reader<R: Read>(source: R, delimiter: u8) -> Result<csv::Reader<R>, ReferenceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);
    let headers: StringRecord = rdr.headers()?.iter().map(str::to_ascii_lowercase).collect();
    rdr.set_headers(headers);
    Ok(rdr)
}

fn lms_for(sex: Sex, key: String, l: f64, m: f64, s: f64) -> Result<LmsParams, ReferenceError> {
    LmsParams::new(l, m, s).map_err(|e| ReferenceError::InvalidLms {
        sex,
        key,
        reason: e.to_string(),
    })
}

/// Parse an age-indexed table (`sex`, `age`/`day`, `l`, `m`, `s`).
///
/// # Errors
///
/// Returns [`ReferenceError`] on malformed rows, invalid sex codes, invalid
/// LMS triples, or when the rows do not form a dense table.
pub fn read_age_table<R: Read>(source: R, delimiter: u8) -> Result<AgeTable, ReferenceError> {
    let mut rdr = reader(source, delimiter)?;
    let mut rows = Vec::new();
    for record in rdr.deserialize::<AgeRecord>() {
        let r = record?;
        let sex = Sex::try_from(r.sex)?;
        let lms = lms_for(sex, format!("day {}", r.age), r.l, r.m, r.s)?;
        rows.push((sex, r.age, lms));
    }
    AgeTable::from_rows(rows)
}

/// Parse a length-indexed table (`sex`, `length`, `l`, `m`, `s`).
///
/// Lengths are quantised with [`LengthKey::from_cm`], so `45`, `45.0` and
/// `45.00` all name the same row.
///
/// # Errors
///
/// Same conditions as [`read_age_table`], plus
/// [`ReferenceError::InvalidLengthKey`] for unparsable lengths.
pub fn read_length_table<R: Read>(
    source: R,
    delimiter: u8,
) -> Result<LengthTable, ReferenceError> {
    let mut rdr = reader(source, delimiter)?;
    let mut rows = Vec::new();
    for record in rdr.deserialize::<LengthRecord>() {
        let r = record?;
        let sex = Sex::try_from(r.sex)?;
        let key: LengthKey = r.length.parse()?;
        let lms = lms_for(sex, format!("{key} cm"), r.l, r.m, r.s)?;
        rows.push((sex, key, lms));
    }
    LengthTable::from_rows(rows)
}
