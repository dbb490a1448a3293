//! Error types for engine construction.
//!
//! Every failure is detected while validating an
//! [`EngineConfig`](crate::EngineConfig). Once an [`Engine`](crate::Engine)
//! exists, stepping it cannot fail.

use thiserror::Error;

/// Result type alias for fallible engine operations.
pub type TspResult<T> = Result<T, EngineError>;

/// Errors reported when building an engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// All cities share one coordinate, so every tour has length zero
    /// and fitness (`1 / length`) is undefined.
    #[error("degenerate tour: all {cities} cities coincide, tour length would be zero")]
    DegenerateTour {
        /// Number of configured cities.
        cities: usize,
    },
}

impl EngineError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::invalid("population_size must be at least 2");
        assert_eq!(
            err.to_string(),
            "invalid configuration: population_size must be at least 2"
        );

        let err = EngineError::DegenerateTour { cities: 3 };
        assert!(err.to_string().contains("all 3 cities coincide"));
    }
}
