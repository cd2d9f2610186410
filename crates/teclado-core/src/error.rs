//! Error types for DTMF synthesis.

use thiserror::Error;

/// Errors that can occur while resolving durations or rendering a sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SynthError {
    /// The input contains no tone-producing symbols (empty or silence-only).
    #[error("no tone-producing symbols in input")]
    NoValidSymbols,

    /// An explicit per-symbol duration list does not match the symbol count.
    #[error("expected {expected} duration values, got {actual}")]
    DurationCountMismatch {
        /// Number of symbols in the sanitized sequence.
        expected: usize,
        /// Number of duration values supplied.
        actual: usize,
    },

    /// A duration token is neither a beat macro nor a non-negative number.
    #[error("invalid duration value: '{0}'")]
    InvalidDurationValue(String),

    /// A symbol outside the supported alphabet reached the renderer.
    #[error("unsupported symbol: '{0}'")]
    UnsupportedSymbol(char),
}
