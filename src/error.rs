//! Error types for forage.
//!
//! All fallible operations return `Result<T, ForageError>` instead of
//! panicking. Precondition errors are raised before any walk is simulated;
//! budget errors are raised at the point the budget runs out.

use thiserror::Error;

/// Result type alias for forage operations.
pub type ForageResult<T> = Result<T, ForageError>;

/// Unified error type for all forage operations.
#[derive(Debug, Error)]
pub enum ForageError {
    // ===== Caller Preconditions =====
    /// Confidence level outside the open interval (0, 1).
    #[error("Invalid confidence level {level}: must lie strictly between 0 and 1")]
    InvalidConfidenceLevel {
        /// The rejected level.
        level: f64,
    },

    /// Negative number of rounding digits.
    #[error("Invalid digits {digits}: must be non-negative")]
    InvalidDigits {
        /// The rejected digit count.
        digits: i32,
    },

    /// The food predicate already holds at the anthill.
    #[error("Boundary predicate is satisfied at the origin ({x}, {y}); walks would be empty")]
    OriginInsideFood {
        /// Origin x coordinate.
        x: i64,
        /// Origin y coordinate.
        y: i64,
    },

    // ===== Statistics =====
    /// Sample too small for a variance estimate.
    #[error("Insufficient sample: {size} values, at least {required} required")]
    InsufficientSample {
        /// Sample size provided.
        size: usize,
        /// Minimum sample size.
        required: usize,
    },

    /// A sampling distribution could not be built for the sample.
    #[error("Statistics error: {message}")]
    Statistics {
        /// Description of the failure.
        message: String,
    },

    // ===== Budgets =====
    /// A single walk exceeded its step ceiling.
    #[error("Walk did not reach food within {ceiling} steps (stopped at {steps})")]
    NonTermination {
        /// Steps taken when the walk was abandoned.
        steps: u64,
        /// Configured step ceiling.
        ceiling: u64,
    },

    /// The estimation run exhausted its simulation budget.
    #[error("No convergence after {simulations} simulations (interval [{low:.6}, {high:.6}])")]
    NonConvergence {
        /// Simulations run before giving up.
        simulations: u64,
        /// Last interval lower bound.
        low: f64,
        /// Last interval upper bound.
        high: f64,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ForageError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a statistics error with a message.
    #[must_use]
    pub fn statistics(message: impl Into<String>) -> Self {
        Self::Statistics {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this error reports caller misconfiguration rather than an
    /// exhausted budget.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfidenceLevel { .. }
                | Self::InvalidDigits { .. }
                | Self::OriginInsideFood { .. }
                | Self::InsufficientSample { .. }
                | Self::Config { .. }
                | Self::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_detection() {
        assert!(ForageError::InvalidConfidenceLevel { level: 1.5 }.is_precondition());
        assert!(ForageError::InvalidDigits { digits: -1 }.is_precondition());
        assert!(ForageError::OriginInsideFood { x: 0, y: 0 }.is_precondition());
        assert!(ForageError::config("bad").is_precondition());

        let budget = ForageError::NonTermination {
            steps: 100,
            ceiling: 100,
        };
        assert!(!budget.is_precondition());

        let budget = ForageError::NonConvergence {
            simulations: 10,
            low: 1.0,
            high: 2.0,
        };
        assert!(!budget.is_precondition());
    }

    #[test]
    fn test_error_display_confidence() {
        let msg = ForageError::InvalidConfidenceLevel { level: 1.5 }.to_string();
        assert!(msg.contains("confidence level"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_error_display_digits() {
        let msg = ForageError::InvalidDigits { digits: -3 }.to_string();
        assert!(msg.contains("-3"));
        assert!(msg.contains("non-negative"));
    }

    #[test]
    fn test_error_display_insufficient_sample() {
        let msg = ForageError::InsufficientSample {
            size: 1,
            required: 2,
        }
        .to_string();
        assert!(msg.contains("1 values"));
        assert!(msg.contains("at least 2"));
    }

    #[test]
    fn test_error_display_non_termination() {
        let msg = ForageError::NonTermination {
            steps: 500,
            ceiling: 500,
        }
        .to_string();
        assert!(msg.contains("within 500 steps"));
    }

    #[test]
    fn test_error_display_non_convergence() {
        let msg = ForageError::NonConvergence {
            simulations: 1000,
            low: 41.25,
            high: 43.5,
        }
        .to_string();
        assert!(msg.contains("1000 simulations"));
        assert!(msg.contains("41.250000"));
    }

    #[test]
    fn test_error_config() {
        let err = ForageError::config("invalid parameter");
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("invalid parameter"));
    }

    #[test]
    fn test_error_statistics_is_not_precondition() {
        let err = ForageError::statistics("student-t(0): bad freedom");
        assert!(!err.is_precondition());
        assert!(err.to_string().contains("Statistics error"));
        assert!(err.to_string().contains("bad freedom"));
    }

    #[test]
    fn test_error_serialization() {
        let err = ForageError::serialization("failed to serialize");
        assert!(!err.is_precondition());
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_io_from() {
        let err: ForageError = std::io::Error::other("file not found").into();
        assert!(!err.is_precondition());
        assert!(err.to_string().contains("I/O error"));
    }
}
