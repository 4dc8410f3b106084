//! Error types for the crescere-growth crate.

/// Error type for the fallible edges of the crescere-growth crate.
///
/// Z-score, percentile and velocity computations never fail; they report
/// missing or out-of-range inputs as `None` or by skipping observations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrowthError {
    /// Returned when a velocity field name is not `weight` or `length`.
    #[error("unknown velocity field: {name:?} (expected weight or length)")]
    UnknownField {
        /// The rejected name.
        name: String,
    },

    /// Returned when a date string cannot be parsed.
    #[error(transparent)]
    Date(#[from] crescere_age::AgeError),

    /// Returned when a sex code or name is not recognised.
    #[error(transparent)]
    Reference(#[from] crescere_reference::ReferenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_field() {
        let err = GrowthError::UnknownField {
            name: "head".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown velocity field: \"head\" (expected weight or length)"
        );
    }

    #[test]
    fn error_date_is_transparent() {
        let inner = crescere_age::AgeError::InvalidDate {
            text: "soon".to_string(),
        };
        let msg = inner.to_string();
        assert_eq!(GrowthError::from(inner).to_string(), msg);
    }

    #[test]
    fn error_reference_is_transparent() {
        let err = GrowthError::from(crescere_reference::ReferenceError::InvalidSex { code: 9 });
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn error_is_std_error() {
        let err = GrowthError::UnknownField {
            name: String::new(),
        };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GrowthError>();
    }
}
