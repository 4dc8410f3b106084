//! The four WHO reference tables, loaded once and shared read-only.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crescere_lms::LmsParams;
use tracing::{debug, info};

use crate::error::ReferenceError;
use crate::indicator::AgeIndicator;
use crate::length_key::LengthKey;
use crate::loader::{LoaderConfig, read_age_table, read_length_table};
use crate::sex::Sex;
use crate::table::{AgeTable, LengthTable};

/// Weight-, length- and head-circumference-for-age tables plus the
/// weight-for-length table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSet {
    weight_for_age: AgeTable,
    length_for_age: AgeTable,
    head_circumference_for_age: AgeTable,
    weight_for_length: LengthTable,
}

impl ReferenceSet {
    /// Assemble a set from already-built tables.
    pub fn new(
        weight_for_age: AgeTable,
        length_for_age: AgeTable,
        head_circumference_for_age: AgeTable,
        weight_for_length: LengthTable,
    ) -> Self {
        Self {
            weight_for_age,
            length_for_age,
            head_circumference_for_age,
            weight_for_length,
        }
    }

    /// Load all four tables from `dir` using the file names in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::FileNotFound`] if a file is missing, and any
    /// parse or density error from the individual tables.
    #[tracing::instrument(skip(dir, config), fields(dir = %dir.display()))]
    pub fn from_dir(dir: &Path, config: &LoaderConfig) -> Result<Self, ReferenceError> {
        let delimiter = config.delimiter();
        let open = |name: &str| open_table(&dir.join(name));

        let weight_for_age = read_age_table(open(config.weight_for_age())?, delimiter)?;
        let length_for_age = read_age_table(open(config.length_for_age())?, delimiter)?;
        let head_circumference_for_age =
            read_age_table(open(config.head_circumference_for_age())?, delimiter)?;
        let weight_for_length = read_length_table(open(config.weight_for_length())?, delimiter)?;

        for sex in Sex::ALL {
            debug!(
                %sex,
                wfa_days = weight_for_age.len(sex),
                lfa_days = length_for_age.len(sex),
                hcfa_days = head_circumference_for_age.len(sex),
                wfl_lengths = weight_for_length.len(sex),
                "reference rows loaded"
            );
        }
        info!("reference tables loaded");

        Ok(Self::new(
            weight_for_age,
            length_for_age,
            head_circumference_for_age,
            weight_for_length,
        ))
    }

    /// The table backing an age-indexed indicator.
    pub fn age_table(&self, indicator: AgeIndicator) -> &AgeTable {
        match indicator {
            AgeIndicator::WeightForAge => &self.weight_for_age,
            AgeIndicator::LengthForAge => &self.length_for_age,
            AgeIndicator::HeadCircumferenceForAge => &self.head_circumference_for_age,
        }
    }

    /// The weight-for-length table.
    pub fn length_table(&self) -> &LengthTable {
        &self.weight_for_length
    }

    /// LMS parameters for an age-indexed indicator, or `None` when the day is
    /// past the end of the table.
    pub fn age_lms(&self, indicator: AgeIndicator, sex: Sex, day: u32) -> Option<LmsParams> {
        self.age_table(indicator).get(sex, day)
    }

    /// Weight-for-length LMS parameters at exactly `key`.
    pub fn length_lms(&self, sex: Sex, key: LengthKey) -> Option<LmsParams> {
        self.weight_for_length.get(sex, key)
    }
}

fn open_table(path: &Path) -> Result<BufReader<File>, ReferenceError> {
    if !path.exists() {
        return Err(ReferenceError::FileNotFound {
            path: PathBuf::from(path),
        });
    }
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| ReferenceError::Io {
            path: PathBuf::from(path),
            reason: e.to_string(),
        })
}
