//! Severity buckets for z-scores.

use std::fmt;

use serde::Serialize;

/// How far a z-score lies from the median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZScoreSeverity {
    /// No z-score, or NaN.
    Unknown,
    /// |z| ≤ 1.
    Normal,
    /// 1 < |z| ≤ 2.
    Mild,
    /// 2 < |z| ≤ 3.
    Moderate,
    /// |z| > 3.
    Severe,
}

impl ZScoreSeverity {
    /// Bucket a z-score by magnitude.
    pub fn classify(z: Option<f64>) -> Self {
        let Some(z) = z.filter(|z| !z.is_nan()) else {
            return Self::Unknown;
        };
        let abs = z.abs();
        if abs > 3.0 {
            Self::Severe
        } else if abs > 2.0 {
            Self::Moderate
        } else if abs > 1.0 {
            Self::Mild
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for ZScoreSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Normal => "normal",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets() {
        assert_eq!(ZScoreSeverity::classify(Some(0.0)), ZScoreSeverity::Normal);
        assert_eq!(ZScoreSeverity::classify(Some(-1.5)), ZScoreSeverity::Mild);
        assert_eq!(ZScoreSeverity::classify(Some(2.5)), ZScoreSeverity::Moderate);
        assert_eq!(ZScoreSeverity::classify(Some(-3.5)), ZScoreSeverity::Severe);
    }

    #[test]
    fn boundaries_belong_to_the_lower_bucket() {
        assert_eq!(ZScoreSeverity::classify(Some(1.0)), ZScoreSeverity::Normal);
        assert_eq!(ZScoreSeverity::classify(Some(-2.0)), ZScoreSeverity::Mild);
        assert_eq!(ZScoreSeverity::classify(Some(3.0)), ZScoreSeverity::Moderate);
    }

    #[test]
    fn missing_and_nan_are_unknown() {
        assert_eq!(ZScoreSeverity::classify(None), ZScoreSeverity::Unknown);
        assert_eq!(ZScoreSeverity::classify(Some(f64::NAN)), ZScoreSeverity::Unknown);
    }

    #[test]
    fn infinities_are_severe() {
        assert_eq!(
            ZScoreSeverity::classify(Some(f64::NEG_INFINITY)),
            ZScoreSeverity::Severe
        );
    }

    #[test]
    fn display() {
        assert_eq!(ZScoreSeverity::Moderate.to_string(), "moderate");
    }
}
