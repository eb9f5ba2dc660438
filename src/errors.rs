/*!
 * Error types for the cuesplit engine.
 *
 * Typed errors for the library surface, defined with the thiserror crate.
 * The controller and CLI wrap these in `anyhow` with context.
 */

use thiserror::Error;

/// Errors raised while reading timecodes or subtitle text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A timecode or subtitle entry could not be understood
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// No usable subtitle entry was found in the input
    #[error("No subtitle entries found in input")]
    EmptyInput,
}

/// Errors raised when an interval breaks the timing invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// End time is not strictly after start time
    #[error("Non-monotonic interval in cue {index}: end {end_ms}ms <= start {start_ms}ms")]
    NonMonotonicInterval {
        /// Index of the offending cue or segment
        index: u32,
        /// Start time in milliseconds
        start_ms: u64,
        /// End time in milliseconds
        end_ms: u64,
    },
}

/// Errors that can occur during subtitle processing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubtitleError {
    /// Error while parsing subtitle or timecode text
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error in the timing of a cue
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}
