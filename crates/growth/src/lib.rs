//! # crescere-growth
//!
//! WHO growth assessment for child measurements.
//!
//! Turns dated weight, length and head-circumference measurements into the
//! four WHO z-scores, percentiles, severity buckets and growth velocities.
//!
//! | Output | Indicator | Transform | Age range |
//! |--------|-----------|-----------|-----------|
//! | `waz` | weight-for-age | bounded | 0..=1826 days |
//! | `lhaz` | length/height-for-age | standard | 0..=1826 days |
//! | `headcz` | head-circumference-for-age | standard | 0..=1826 days |
//! | `wflz` | weight-for-length | bounded | 0..=730 days |
//!
//! Nothing here returns an error for out-of-domain input: a z-score that
//! cannot be computed is `None`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use chrono::NaiveDate;
//! use crescere_growth::{
//!     Measurement, VelocityField, ZScoreSeverity, assess, percentile_from_z, velocity,
//! };
//! use crescere_reference::{LoaderConfig, ReferenceSet, Sex};
//!
//! let refs = ReferenceSet::from_dir(Path::new("data/who"), &LoaderConfig::default()).unwrap();
//! let birth = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let history = vec![
//!     Measurement::new(birth).with_weight(3400.0).with_length(50.0),
//!     Measurement::new(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()).with_weight(4400.0),
//! ];
//!
//! for a in assess(&refs, birth, Sex::Male, &history) {
//!     let waz = a.z_scores.waz;
//!     println!("{:?} {:?} {}", waz, percentile_from_z(waz), ZScoreSeverity::classify(waz));
//! }
//! for rate in velocity(&history, VelocityField::Weight) {
//!     println!("{} g/day", rate.rate_per_day);
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `measurement` | Dated measurement record |
//! | `zscore` | Composite z-scores for one measurement |
//! | `assess` | Z-scores over a measurement history |
//! | `severity` | Severity buckets |
//! | `percentile` | Z-score / percentile conversion |
//! | `velocity` | Rates between consecutive measurements |
//! | `curve` | Reference curves at a fixed z-score |
//! | `error` | Error types |

mod assess;
mod curve;
mod error;
mod measurement;
mod percentile;
mod severity;
mod velocity;
mod zscore;

pub use assess::{Assessment, assess, assess_iso};
pub use curve::{CurvePoint, month_days, reference_curve};
pub use error::GrowthError;
pub use measurement::Measurement;
pub use percentile::{percentile_from_z, z_from_percentile};
pub use severity::ZScoreSeverity;
pub use velocity::{
    AgedRateObservation, AgedVelocity, RateObservation, Velocity, VelocityField, velocity,
    velocity_with_age,
};
pub use zscore::{MAX_AGE_DAYS, WFL_MAX_AGE_DAYS, ZScores, z_scores, z_scores_for_code};
