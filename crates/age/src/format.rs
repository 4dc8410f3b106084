//! Human-readable "N months M days" age strings.

use serde::{Deserialize, Serialize};

/// Average Gregorian month length in days (365.25 / 12).
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Unit labels supplied by the caller's locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgeLabels {
    /// Shown for negative ages.
    pub invalid: String,
    /// Suffix after the month count.
    pub month: String,
    /// Suffix after the day count.
    pub day: String,
}

impl Default for AgeLabels {
    fn default() -> Self {
        Self {
            invalid: "Invalid".to_string(),
            month: "m".to_string(),
            day: "d".to_string(),
        }
    }
}

/// Split an age into whole months and the remaining days, rounded.
///
/// Months are `floor(age / 30.4375)`; days are the remainder rounded to the
/// nearest whole day, so the day part can reach 30.
pub fn months_and_days(age_in_days: i64) -> (i64, i64) {
    let age = age_in_days as f64;
    let months = (age / DAYS_PER_MONTH).floor() as i64;
    let days = (age % DAYS_PER_MONTH).round() as i64;
    (months, days)
}

/// Format an age in days as months and days using `labels`.
///
/// - negative age: `labels.invalid`
/// - under one month: `"{days}{day}"`
/// - whole months: `"{months}{month}"`
/// - otherwise: `"{months}{month} {days}{day}"`
pub fn format_age(age_in_days: i64, labels: &AgeLabels) -> String {
    if age_in_days < 0 {
        return labels.invalid.clone();
    }
    let (months, days) = months_and_days(age_in_days);
    if months == 0 {
        format!("{days}{}", labels.day)
    } else if days == 0 {
        format!("{months}{}", labels.month)
    } else {
        format!("{months}{} {days}{}", labels.month, labels.day)
    }
}
