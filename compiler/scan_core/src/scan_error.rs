//! Scanner error type.
//!
//! The scanner has exactly one failure mode: a `peek` whose absolute target
//! falls outside the input. It is always recoverable; the same inputs always
//! produce the same error, so retrying is meaningless.

use std::fmt;

use thiserror::Error;

/// Error returned by [`Scanner::peek`](crate::Scanner::peek).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ScanError {
    /// The computed read target is outside `[0, len)`.
    #[error(
        "(E001) scanner peek at position {target} is out of bounds for input of length {len}"
    )]
    OutOfBounds {
        /// Absolute index the peek tried to read (`position + offset`).
        target: isize,
        /// Length of the input in bytes.
        len: usize,
    },
}

impl ScanError {
    /// Stable diagnostic code for this error.
    pub fn code(&self) -> ScanErrorCode {
        match self {
            ScanError::OutOfBounds { .. } => ScanErrorCode::E001,
        }
    }
}

/// Diagnostic codes for scanner errors.
///
/// Codes are stable: tooling may match on the rendered string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanErrorCode {
    /// Peek outside the input.
    E001,
}

impl ScanErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanErrorCode::E001 => "E001",
        }
    }
}

impl fmt::Display for ScanErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
