//! # crescere-age
//!
//! Age arithmetic for growth assessment.
//!
//! ```
//! use crescere_age::{AgeLabels, age_in_days_iso, format_age};
//!
//! let days = age_in_days_iso("2024-01-01", "2024-02-01").unwrap();
//! assert_eq!(days, 31);
//! assert_eq!(format_age(days, &AgeLabels::default()), "1m 1d");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `days` | Age in days from dates or ISO 8601 strings |
//! | `format` | Month/day formatting with caller-supplied labels |
//! | `error` | Error types |

mod days;
mod error;
mod format;

pub use days::{age_in_days, age_in_days_iso, parse_date};
pub use error::AgeError;
pub use format::{AgeLabels, DAYS_PER_MONTH, format_age, months_and_days};
