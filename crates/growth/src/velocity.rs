//! Growth velocity between consecutive measurements.
//!
//! Measurements are expected in date order. Each measurement is paired
//! with the one directly after it; a pair is dropped when either side lacks
//! the selected value or both were taken on the same day.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use chrono::NaiveDate;
use crescere_age::age_in_days;
use serde::{Deserialize, Serialize};

use crate::error::GrowthError;
use crate::measurement::Measurement;

/// Which measured value a velocity is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VelocityField {
    /// Weight, rate in grams per day.
    Weight,
    /// Length, rate in centimetres per day.
    Length,
}

impl VelocityField {
    /// The selected value of `measurement`, if present.
    pub fn value(self, measurement: &Measurement) -> Option<f64> {
        match self {
            Self::Weight => measurement.present_weight(),
            Self::Length => measurement.present_length(),
        }
    }

    /// Unit of the rate.
    pub fn rate_unit(self) -> &'static str {
        match self {
            Self::Weight => "g/day",
            Self::Length => "cm/day",
        }
    }
}

impl fmt::Display for VelocityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Weight => "weight",
            Self::Length => "length",
        })
    }
}

impl FromStr for VelocityField {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weight" => Ok(Self::Weight),
            "length" | "height" => Ok(Self::Length),
            _ => Err(GrowthError::UnknownField {
                name: s.to_string(),
            }),
        }
    }
}

/// Rate of change between two measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateObservation {
    /// Date of the earlier measurement.
    pub from_date: NaiveDate,
    /// Date of the later measurement.
    pub to_date: NaiveDate,
    /// Earlier value.
    pub from_value: f64,
    /// Later value.
    pub to_value: f64,
    /// Days between the two dates, never zero.
    pub elapsed_days: i64,
    /// `(to_value - from_value) / elapsed_days`.
    pub rate_per_day: f64,
}

/// Lazy iterator over [`RateObservation`]s. Clone it to restart.
#[derive(Debug, Clone)]
pub struct Velocity<'a> {
    field: VelocityField,
    measurements: std::slice::Iter<'a, Measurement>,
    previous: Option<(NaiveDate, f64)>,
}

/// Rates of change of `field` across `measurements`.
///
/// Empty input or a single usable measurement yields nothing.
pub fn velocity(measurements: &[Measurement], field: VelocityField) -> Velocity<'_> {
    Velocity {
        field,
        measurements: measurements.iter(),
        previous: None,
    }
}

impl Iterator for Velocity<'_> {
    type Item = RateObservation;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let m = self.measurements.next()?;
            let Some(value) = self.field.value(m) else {
                self.previous = None;
                continue;
            };
            let Some((from_date, from_value)) = self.previous.replace((m.date, value)) else {
                continue;
            };
            let elapsed_days = age_in_days(from_date, m.date);
            if elapsed_days == 0 {
                continue;
            }
            return Some(RateObservation {
                from_date,
                to_date: m.date,
                from_value,
                to_value: value,
                elapsed_days,
                rate_per_day: (value - from_value) / elapsed_days as f64,
            });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.measurements.len()))
    }
}

impl FusedIterator for Velocity<'_> {}

/// A [`RateObservation`] placed on the child's age axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgedRateObservation {
    /// The underlying rate.
    #[serde(flatten)]
    pub observation: RateObservation,
    /// Age in days at the earlier measurement.
    pub from_age: i64,
    /// Age in days at the later measurement.
    pub to_age: i64,
    /// Midpoint of the interval in days, where the rate is plotted.
    pub mid_age: f64,
}

/// [`Velocity`] with ages relative to a birth date.
#[derive(Debug, Clone)]
pub struct AgedVelocity<'a> {
    inner: Velocity<'a>,
    birth: NaiveDate,
}

/// Like [`velocity`], with each observation placed on the age axis of a
/// child born on `birth`.
pub fn velocity_with_age(
    measurements: &[Measurement],
    field: VelocityField,
    birth: NaiveDate,
) -> AgedVelocity<'_> {
    AgedVelocity {
        inner: velocity(measurements, field),
        birth,
    }
}

impl Iterator for AgedVelocity<'_> {
    type Item = AgedRateObservation;

    fn next(&mut self) -> Option<Self::Item> {
        let observation = self.inner.next()?;
        let from_age = age_in_days(self.birth, observation.from_date);
        let to_age = age_in_days(self.birth, observation.to_date);
        Some(AgedRateObservation {
            observation,
            from_age,
            to_age,
            mid_age: (from_age + to_age) as f64 / 2.0,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for AgedVelocity<'_> {}
