//! Validated LMS parameter triple.

use serde::Serialize;

use crate::error::LmsError;
use crate::transform::{self, ZScoreMethod};

/// |L| below this value is treated as the log-normal limit of the Box-Cox
/// family.
pub const LAMBDA_EPSILON: f64 = 0.001;

/// Box-Cox power (L), median (M) and coefficient of variation (S) of a
/// reference distribution at one (sex, age) or (sex, length) point.
///
/// `l` must be finite, `m` and `s` must be finite and strictly positive.
/// Use [`LmsParams::new`] to construct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LmsParams {
    l: f64,
    m: f64,
    s: f64,
}

impl LmsParams {
    /// Create a new triple after validating each component.
    ///
    /// # Errors
    ///
    /// Returns [`LmsError`] naming the first invalid component.
    pub fn new(l: f64, m: f64, s: f64) -> Result<Self, LmsError> {
        if !l.is_finite() {
            return Err(LmsError::InvalidLambda { l });
        }
        if !m.is_finite() || m <= 0.0 {
            return Err(LmsError::InvalidMedian { m });
        }
        if !s.is_finite() || s <= 0.0 {
            return Err(LmsError::InvalidCoefficient { s });
        }
        Ok(Self { l, m, s })
    }

    /// Box-Cox power (L).
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Median (M).
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Coefficient of variation (S).
    pub fn s(&self) -> f64 {
        self.s
    }

    /// True when L is close enough to zero that the log-normal form is used.
    pub fn is_log_normal(&self) -> bool {
        self.l.abs() < LAMBDA_EPSILON
    }

    /// Measurement value lying exactly `z` standard deviations from the
    /// median: `M·(1 + L·S·z)^(1/L)`, or `M·exp(S·z)` in the log-normal case.
    ///
    /// Returns NaN when `1 + L·S·z` is negative (the curve is undefined
    /// there).
    pub fn value_at(&self, z: f64) -> f64 {
        if self.is_log_normal() {
            self.m * (self.s * z).exp()
        } else {
            self.m * (1.0 + self.l * self.s * z).powf(1.0 / self.l)
        }
    }

    /// Z-score of `value` under the given method.
    ///
    /// `value` must be in the table's unit (kilograms for weight tables).
    pub fn z_score(&self, method: ZScoreMethod, value: f64) -> f64 {
        match method {
            ZScoreMethod::Standard => transform::z_score_standard(value, self),
            ZScoreMethod::Bounded => transform::z_score_bounded(value, self),
        }
    }
}
