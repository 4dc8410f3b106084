//! Error types for the crescere-lms crate.

/// Error type for constructing LMS parameter triples.
///
/// The transforms themselves never fail; only the validated constructor
/// [`LmsParams::new`](crate::LmsParams::new) can reject its inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LmsError {
    /// Returned when the Box-Cox power (L) is NaN or infinite.
    #[error("invalid lambda: {l} (must be finite)")]
    InvalidLambda {
        /// The rejected L value.
        l: f64,
    },

    /// Returned when the median (M) is not finite and strictly positive.
    #[error("invalid median: {m} (must be finite and > 0)")]
    InvalidMedian {
        /// The rejected M value.
        m: f64,
    },

    /// Returned when the coefficient of variation (S) is not finite and
    /// strictly positive.
    #[error("invalid coefficient of variation: {s} (must be finite and > 0)")]
    InvalidCoefficient {
        /// The rejected S value.
        s: f64,
    },
}
