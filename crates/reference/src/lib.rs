//! # crescere-reference
//!
//! WHO Child Growth Standards reference tables.
//!
//! Four tables of LMS triples, each split by sex:
//!
//! | Indicator | Key | WHO file |
//! |-----------|-----|----------|
//! | Weight-for-age | age in days (0..=1856) | `weianthro.txt` |
//! | Length/height-for-age | age in days | `lenanthro.txt` |
//! | Head-circumference-for-age | age in days | `hcanthro.txt` |
//! | Weight-for-length | length, 0.1 cm steps | `wflanthro.txt` |
//!
//! Tables are dense over their domain, so lookup is an exact key match with
//! no interpolation. A key outside the table yields `None`.
//!
//! ## Reference data
//!
//! The tables are not bundled. They are the `weianthro.txt`,
//! `lenanthro.txt`, `hcanthro.txt` and `wflanthro.txt` files distributed by
//! the WHO with the Anthro software and its `igrowup` macros
//! (<https://www.who.int/tools/child-growth-standards/software>), and in the
//! `inst/extdata` directory of the WHO `anthro` R package. Put the four
//! files in one directory and pass it to [`ReferenceSet::from_dir`]; the
//! `crescere` binary reads `data/who` unless `[reference] dir` says
//! otherwise.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use crescere_reference::{AgeIndicator, LengthKey, LoaderConfig, ReferenceSet, Sex};
//!
//! let refs = ReferenceSet::from_dir(Path::new("data/who"), &LoaderConfig::default()).unwrap();
//! let wfa = refs.age_lms(AgeIndicator::WeightForAge, Sex::Male, 0);
//! let wfl = refs.length_lms(Sex::Female, LengthKey::from_cm(53.47).unwrap()); // "53.5"
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `sex` | Sex enum and WHO codes |
//! | `indicator` | Indicators and their z-score transform |
//! | `length_key` | One-decimal length quantisation |
//! | `table` | Dense per-sex tables |
//! | `loader` | WHO Anthro text file parsing |
//! | `set` | The four tables together |
//! | `error` | Error types |

mod error;
mod indicator;
mod length_key;
mod loader;
mod set;
mod sex;
mod table;

pub use error::ReferenceError;
pub use indicator::{AgeIndicator, Indicator};
pub use length_key::LengthKey;
pub use loader::{LoaderConfig, read_age_table, read_length_table};
pub use set::ReferenceSet;
pub use sex::Sex;
pub use table::{AgeTable, LengthTable};
