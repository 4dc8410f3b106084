//! Sex of the child, as encoded in the WHO tables (1 = male, 2 = female).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReferenceError;

/// Sex of the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// WHO code 1.
    Male,
    /// WHO code 2.
    Female,
}

impl Sex {
    /// Both sexes, in code order.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// WHO numeric code (1 or 2).
    pub fn code(self) -> u8 {
        match self {
            Sex::Male => 1,
            Sex::Female => 2,
        }
    }

    /// Zero-based slot used by per-sex table storage.
    pub(crate) fn index(self) -> usize {
        self.code() as usize - 1
    }
}

impl TryFrom<u8> for Sex {
    type Error = ReferenceError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Sex::Male),
            2 => Ok(Sex::Female),
            _ => Err(ReferenceError::InvalidSex { code }),
        }
    }
}

impl FromStr for Sex {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" | "1" => Ok(Sex::Male),
            "female" | "f" | "girl" | "2" => Ok(Sex::Female),
            _ => Err(ReferenceError::UnknownSex {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
        }
    }
}
