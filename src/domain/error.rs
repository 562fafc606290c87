//! Engine validation errors.
//!
//! These errors are returned by operations that validate engine
//! preconditions before computing. They are always recoverable by the
//! caller; the CLI layer translates them into readable messages.

use thiserror::Error;

/// Errors raised when an engine precondition is violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Probability and impact ratings must both be in 1..=10.
    #[error(
        "probability and impact must be between 1 and 10, got probability={probability}, impact={impact}"
    )]
    RatingOutOfRange {
        /// The probability rating that was provided.
        probability: u8,
        /// The impact rating that was provided.
        impact: u8,
    },

    /// A priority category outside the closed low/medium/high set.
    #[error("unknown priority category '{category}', expected one of: low, medium, high")]
    UnknownCategory {
        /// The unrecognized category string.
        category: String,
    },
}
