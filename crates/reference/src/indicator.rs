//! Growth indicators and the transform each one uses.

use std::fmt;

use crescere_lms::ZScoreMethod;
use serde::Serialize;

/// One of the four WHO anthropometric indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Weight-for-age (WAZ).
    WeightForAge,
    /// Length/height-for-age (LAZ, LHAZ).
    LengthForAge,
    /// Head-circumference-for-age (HCZ).
    HeadCircumferenceForAge,
    /// Weight-for-length (WFL).
    WeightForLength,
}

impl Indicator {
    /// All indicators in result order.
    pub const ALL: [Indicator; 4] = [
        Indicator::WeightForAge,
        Indicator::LengthForAge,
        Indicator::HeadCircumferenceForAge,
        Indicator::WeightForLength,
    ];

    /// Transform prescribed for this indicator: bounded for the weight
    /// indicators, standard otherwise.
    pub fn method(self) -> ZScoreMethod {
        match self {
            Indicator::WeightForAge | Indicator::WeightForLength => ZScoreMethod::Bounded,
            Indicator::LengthForAge | Indicator::HeadCircumferenceForAge => ZScoreMethod::Standard,
        }
    }

    /// Short field name of the z-score (`waz`, `lhaz`, `headcz`, `wflz`).
    pub fn abbreviation(self) -> &'static str {
        match self {
            Indicator::WeightForAge => "waz",
            Indicator::LengthForAge => "lhaz",
            Indicator::HeadCircumferenceForAge => "headcz",
            Indicator::WeightForLength => "wflz",
        }
    }

    /// The age-indexed form of this indicator, if it has one.
    pub fn as_age(self) -> Option<AgeIndicator> {
        match self {
            Indicator::WeightForAge => Some(AgeIndicator::WeightForAge),
            Indicator::LengthForAge => Some(AgeIndicator::LengthForAge),
            Indicator::HeadCircumferenceForAge => Some(AgeIndicator::HeadCircumferenceForAge),
            Indicator::WeightForLength => None,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indicator::WeightForAge => "weight-for-age",
            Indicator::LengthForAge => "length-for-age",
            Indicator::HeadCircumferenceForAge => "head-circumference-for-age",
            Indicator::WeightForLength => "weight-for-length",
        };
        f.write_str(name)
    }
}

/// Indicators whose tables are keyed by age in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeIndicator {
    /// Weight-for-age.
    WeightForAge,
    /// Length/height-for-age.
    LengthForAge,
    /// Head-circumference-for-age.
    HeadCircumferenceForAge,
}

impl AgeIndicator {
    /// All age-indexed indicators.
    pub const ALL: [AgeIndicator; 3] = [
        AgeIndicator::WeightForAge,
        AgeIndicator::LengthForAge,
        AgeIndicator::HeadCircumferenceForAge,
    ];

    /// The general indicator this corresponds to.
    pub fn indicator(self) -> Indicator {
        match self {
            AgeIndicator::WeightForAge => Indicator::WeightForAge,
            AgeIndicator::LengthForAge => Indicator::LengthForAge,
            AgeIndicator::HeadCircumferenceForAge => Indicator::HeadCircumferenceForAge,
        }
    }

    /// Transform prescribed for this indicator.
    pub fn method(self) -> ZScoreMethod {
        self.indicator().method()
    }
}

impl fmt::Display for AgeIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.indicator().fmt(f)
    }
}
