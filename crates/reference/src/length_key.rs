//! One-decimal length key for the weight-for-length table.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ReferenceError;

/// Length quantised to 0.1 cm, stored as an integer count of millimetres.
///
/// The weight-for-length reference is only defined at these exact points, so
/// lookups quantise and never interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct LengthKey(u32);

impl LengthKey {
    /// Quantise a length in centimetres to one decimal place.
    ///
    /// Rounds the exact binary value to the nearest tenth, the way a
    /// fixed-point formatter does (so `45.05`, stored as 45.0499…, becomes
    /// `45.0`). Exact ties, which only occur at quarter centimetres, round up.
    ///
    /// Returns `None` for negative, NaN or infinite input.
    pub fn from_cm(cm: f64) -> Option<Self> {
        if !cm.is_finite() || cm < 0.0 || cm > f64::from(u32::MAX / 10) {
            return None;
        }
        let tenths = if (cm * 4.0).fract() == 0.0 {
            (cm * 10.0).round()
        } else {
            let fixed: f64 = format!("{cm:.1}").parse().ok()?;
            (fixed * 10.0).round()
        };
        Some(Self(tenths as u32))
    }

    /// Key from an integer count of tenths of a centimetre.
    pub fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    /// Length in tenths of a centimetre.
    pub fn tenths(self) -> u32 {
        self.0
    }

    /// Length in centimetres.
    pub fn cm(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// The key 0.1 cm above this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for LengthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl From<LengthKey> for String {
    fn from(key: LengthKey) -> Self {
        key.to_string()
    }
}

impl FromStr for LengthKey {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::from_cm)
            .ok_or_else(|| ReferenceError::InvalidLengthKey {
                text: s.to_string(),
            })
    }
}
