//! A single dated anthropometric measurement.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weight, length and head circumference recorded on one date.
///
/// Weight is in grams, length and head circumference in centimetres. Any of
/// the three may be missing. A value only counts as present when it is
/// finite and strictly positive, so `Some(0.0)` behaves like `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Measurement {
    /// Calendar date of the measurement.
    pub date: NaiveDate,
    /// Weight in grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Recumbent length or standing height in centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Head circumference in centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_circ: Option<f64>,
}

impl Measurement {
    /// A measurement on `date` with no values recorded.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weight: None,
            length: None,
            head_circ: None,
        }
    }

    /// Set the weight in grams.
    pub fn with_weight(mut self, grams: f64) -> Self {
        self.weight = Some(grams);
        self
    }

    /// Set the length in centimetres.
    pub fn with_length(mut self, cm: f64) -> Self {
        self.length = Some(cm);
        self
    }

    /// Set the head circumference in centimetres.
    pub fn with_head_circ(mut self, cm: f64) -> Self {
        self.head_circ = Some(cm);
        self
    }

    /// Weight in grams, if present.
    pub fn present_weight(&self) -> Option<f64> {
        present(self.weight)
    }

    /// Length in centimetres, if present.
    pub fn present_length(&self) -> Option<f64> {
        present(self.length)
    }

    /// Head circumference in centimetres, if present.
    pub fn present_head_circ(&self) -> Option<f64> {
        present(self.head_circ)
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
