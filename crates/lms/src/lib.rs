//! LMS (Lambda-Mu-Sigma) z-score transforms.
//!
//! A WHO growth reference describes the distribution of a measurement at each
//! age (or length) by three parameters: the Box-Cox power **L**, the median
//! **M** and the coefficient of variation **S**. This crate converts a raw
//! measurement into a z-score against one such triple.
//!
//! | Transform | Formula | Used for |
//! |-----------|---------|----------|
//! | Standard | `((v/M)^L - 1) / (L·S)`, or `ln(v/M)/S` when `|L| < 0.001` | length, head circumference |
//! | Bounded | Standard inside ±3, linear in SD spacing outside | weight-for-age, weight-for-length |
//!
//! # Quick Start
//!
//! ```
//! use crescere_lms::{LmsParams, ZScoreMethod};
//!
//! // Weight-for-age, boys, day 0.
//! let lms = LmsParams::new(0.3487, 3.3464, 0.14602).unwrap();
//! let z = lms.z_score(ZScoreMethod::Bounded, 3.3464);
//! assert_eq!(z, 0.0);
//! ```

mod error;
mod params;
mod transform;

pub use error::LmsError;
pub use params::{LAMBDA_EPSILON, LmsParams};
pub use transform::{ZScoreMethod, z_score_bounded, z_score_standard};
