//! # Error Types

/// Errors from walltimer configuration.
///
/// Failures raised by a wrapped callable are never converted into this type;
/// they reach the caller exactly as the callable produced them.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimerError {
    /// The iteration count must be at least 1.
    #[error("iterations ({iterations}) must be a positive integer greater than 0")]
    InvalidConfiguration {
        /// The rejected iteration count.
        iterations: usize,
    },

    /// The print precision exceeds what the formatter supports.
    #[error("precision ({precision}) must be <= {max}")]
    PrecisionTooLarge {
        /// The rejected precision.
        precision: usize,
        /// The largest supported precision.
        max: usize,
    },
}

/// Result type for walltimer operations.
pub type TimerResult<T> = core::result::Result<T, TimerError>;
