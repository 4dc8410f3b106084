//! Error types for crescere-reference.

use std::path::PathBuf;

use crate::sex::Sex;

/// Error type for all fallible operations in the crescere-reference crate.
///
/// Lookups never fail (a missing entry is `None`); these errors come from
/// parsing sex codes and length keys and from loading reference tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferenceError {
    /// Returned when a required table file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a read failure on an existing file.
    #[error("failed to read {}: {reason}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a table row cannot be parsed.
    #[error("malformed record at line {line}: {reason}")]
    Malformed {
        /// 1-based line number in the source, 0 if unknown.
        line: u64,
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when a numeric sex code is neither 1 nor 2.
    #[error("invalid sex code: {code} (must be 1 = male or 2 = female)")]
    InvalidSex {
        /// The rejected code.
        code: u8,
    },

    /// Returned when a sex name cannot be recognised.
    #[error("unknown sex: {name:?} (expected male, female, 1 or 2)")]
    UnknownSex {
        /// The rejected text.
        name: String,
    },

    /// Returned when a length key cannot be parsed.
    #[error("invalid length key: {text:?}")]
    InvalidLengthKey {
        /// The rejected text.
        text: String,
    },

    /// Returned when a row carries an invalid LMS triple.
    #[error("invalid LMS parameters for {sex} at {key}: {reason}")]
    InvalidLms {
        /// Sex of the offending row.
        sex: Sex,
        /// Table key (day or length) of the offending row.
        key: String,
        /// Validation failure reported by the LMS constructor.
        reason: String,
    },

    /// Returned when the same (sex, key) appears twice.
    #[error("duplicate entry for {sex} at {key}")]
    DuplicateKey {
        /// Sex of the duplicated row.
        sex: Sex,
        /// Duplicated key.
        key: String,
    },

    /// Returned when a table is not dense over its domain.
    #[error("gap in {sex} table: expected {expected}, found {found}")]
    Gap {
        /// Sex whose table has the gap.
        sex: Sex,
        /// Key that should have come next.
        expected: String,
        /// Key that was found instead.
        found: String,
    },

    /// Returned when a table has no rows for one sex.
    #[error("no rows for {sex}")]
    EmptyTable {
        /// Sex without rows.
        sex: Sex,
    },
}

impl From<csv::Error> for ReferenceError {
    fn from(e: csv::Error) -> Self {
        ReferenceError::Malformed {
            line: e.position().map_or(0, |p| p.line()),
            reason: e.to_string(),
        }
    }
}
