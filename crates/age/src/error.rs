//! Error types for the crescere-age crate.

/// Error type for all fallible operations in the crescere-age crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgeError {
    /// Returned when a date string is not ISO 8601 (`YYYY-MM-DD` or an
    /// RFC 3339 timestamp).
    #[error("invalid date: {text:?} (expected YYYY-MM-DD or RFC 3339)")]
    InvalidDate {
        /// The rejected text.
        text: String,
    },
}
