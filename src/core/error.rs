//! Error handling and error types for cardinal.
//!
//! Fatal conditions are reported through [`CardinalError`] and propagated with
//! `?`. A pool that is smaller than the requested batch is *not* an error: it
//! is reported as a [`NotEnoughSamples`](crate::core::types::NotEnoughSamples)
//! diagnostic alongside a valid selection.

use std::io;
use thiserror::Error;

/// Main error type for the cardinal library.
#[derive(Error, Debug)]
pub enum CardinalError {
    /// Configuration and validation errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Strategy identifier that does not name a known selection policy
    #[error("Unknown sample selection strategy {strategy}")]
    UnknownStrategy { strategy: String },

    /// Weights that cannot be normalized into a probability vector
    #[error("Degenerate weights for strategy {strategy}: {reason}")]
    DegenerateWeights { strategy: String, reason: String },

    /// Score that cannot rank a sample
    #[error("Invalid score at index {index}: {value}, scores must be finite")]
    InvalidScore { index: usize, value: f64 },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Out of bounds access
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// A chain needs at least one stage
    #[error("Sampler chain must contain at least one sampler")]
    EmptyChain,

    /// Failure reported by the random source while drawing
    #[error("Sampling error: {message}")]
    Sampling { message: String },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// TOML deserialization errors
    #[error("TOML error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    /// Internal library errors (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Type alias for Results using CardinalError
pub type Result<T> = std::result::Result<T, CardinalError>;

impl CardinalError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        CardinalError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        CardinalError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown strategy error
    pub fn unknown_strategy<S: Into<String>>(strategy: S) -> Self {
        CardinalError::UnknownStrategy {
            strategy: strategy.into(),
        }
    }

    /// Create a degenerate weights error
    pub fn degenerate_weights<S, R>(strategy: S, reason: R) -> Self
    where
        S: Into<String>,
        R: Into<String>,
    {
        CardinalError::DegenerateWeights {
            strategy: strategy.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid score error
    pub fn invalid_score(index: usize, value: f64) -> Self {
        CardinalError::InvalidScore { index, value }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        CardinalError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        CardinalError::IndexOutOfBounds { index, length }
    }

    /// Create a sampling error
    pub fn sampling<S: Into<String>>(message: S) -> Self {
        CardinalError::Sampling {
            message: message.into(),
        }
    }

    /// Create an internal error (should be used sparingly)
    pub fn internal<S: Into<String>>(message: S) -> Self {
        CardinalError::Internal {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable
    ///
    /// Degenerate weights depend on the scores of the current pool, so a later
    /// iteration with a different pool may succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CardinalError::Config { .. } => false,
            CardinalError::InvalidParameter { .. } => false,
            CardinalError::UnknownStrategy { .. } => false,
            CardinalError::DegenerateWeights { .. } => true,
            CardinalError::InvalidScore { .. } => false,
            CardinalError::DimensionMismatch { .. } => false,
            CardinalError::IndexOutOfBounds { .. } => false,
            CardinalError::EmptyChain => false,
            CardinalError::Sampling { .. } => true,
            CardinalError::IO { .. } => false,
            CardinalError::Json { .. } => false,
            CardinalError::Toml { .. } => false,
            CardinalError::Internal { .. } => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CardinalError::Config { .. } => "config",
            CardinalError::InvalidParameter { .. } => "invalid_parameter",
            CardinalError::UnknownStrategy { .. } => "unknown_strategy",
            CardinalError::DegenerateWeights { .. } => "degenerate_weights",
            CardinalError::InvalidScore { .. } => "invalid_score",
            CardinalError::DimensionMismatch { .. } => "dimension_mismatch",
            CardinalError::IndexOutOfBounds { .. } => "index_out_of_bounds",
            CardinalError::EmptyChain => "empty_chain",
            CardinalError::Sampling { .. } => "sampling",
            CardinalError::IO { .. } => "io",
            CardinalError::Json { .. } => "json",
            CardinalError::Toml { .. } => "toml",
            CardinalError::Internal { .. } => "internal",
        }
    }
}

/// Convenience macros for error creation
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::core::error::CardinalError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::CardinalError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CardinalError::config("test configuration error");
        assert_eq!(err.category(), "config");
        assert!(!err.is_recoverable());

        let err = CardinalError::degenerate_weights("linear_choice", "sum is zero");
        assert_eq!(err.category(), "degenerate_weights");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_macros() {
        let err = config_error!("test error");
        assert!(matches!(err, CardinalError::Config { .. }));

        let err = config_error!("batch size {} too large", 42);
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_unknown_strategy_names_value() {
        let err = CardinalError::unknown_strategy("cubic_choice");
        assert_eq!(err.category(), "unknown_strategy");
        assert!(err.to_string().contains("cubic_choice"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_ensure_macro() {
        fn check(batch_size: usize) -> Result<usize> {
            ensure!(
                batch_size > 0,
                CardinalError::invalid_parameter("batch_size", "0", "must be positive")
            );
            Ok(batch_size)
        }

        assert_eq!(check(3).unwrap(), 3);
        assert!(matches!(
            check(0),
            Err(CardinalError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_invalid_score_display() {
        let err = CardinalError::invalid_score(1, f64::NAN);
        assert_eq!(err.category(), "invalid_score");
        assert!(err.to_string().contains("index 1"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = CardinalError::dimension_mismatch("10 scores", "9 scores");
        let error_string = format!("{}", err);
        assert!(error_string.contains("Dimension mismatch"));
        assert!(error_string.contains("10 scores"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: CardinalError = io_err.into();
        assert!(matches!(err, CardinalError::IO { .. }));
        assert_eq!(err.category(), "io");
    }
}
