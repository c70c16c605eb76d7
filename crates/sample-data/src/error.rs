//! Error types for the sample-data crate.
//!
//! Generators never surface these to their callers: dataset errors are
//! consumed by the pool resolver, which degrades to a fallback value. The
//! only public operation that reports a failure is [`crate::number::to_roman`].

use thiserror::Error;

/// Errors that can occur when reading or parsing a locale dataset.
///
/// The `key` field carries the dataset address rendered as
/// `domain:locale:dataset`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The backing store holds no resource for the key.
    #[error("dataset '{key}' not found")]
    NotFound {
        /// Rendered dataset key.
        key: String,
    },

    /// The resource exists but could not be read.
    #[error("failed to read dataset '{key}': {message}")]
    ReadError {
        /// Rendered dataset key.
        key: String,
        /// Description of the I/O error.
        message: String,
    },

    /// The resource is not a JSON object of string lists.
    #[error("invalid dataset JSON in '{key}': {message}")]
    ParseError {
        /// Rendered dataset key.
        key: String,
        /// Description of the parse error.
        message: String,
    },
}

/// Errors returned by roman numeral conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RomanNumeralError {
    /// Only 1 through 3999 have a standard roman numeral form.
    #[error("{value} is outside the roman numeral range 1..=3999")]
    OutOfRange {
        /// The rejected value.
        value: i64,
    },
}
