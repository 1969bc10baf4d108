//! Positionable read cursor over an immutable byte buffer.
//!
//! The scanner never moves its own cursor. Callers read and write
//! [`Scanner::position`] directly, including seeking backward for
//! backtracking or past either end. Nothing is validated at seek time;
//! [`Scanner::peek`] re-checks bounds on every read.
//!
//! # Storage Units
//!
//! Indexing is by raw byte. For UTF-8 input a multi-byte character
//! occupies several positions, and `peek` returns its individual bytes.

use tracing::trace;

use crate::{ScanError, SourceLocation};

/// Read cursor with relative lookahead and end-of-input detection.
///
/// The input is borrowed, so it can be shared read-only with whoever built
/// the scanner. The scanner is [`Copy`], which makes snapshots for
/// backtracking a plain assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scanner<'src> {
    /// Input buffer. Fixed at construction.
    input: &'src [u8],
    /// Index of the next byte to consume.
    ///
    /// Any value is allowed, including negative or past-the-end positions.
    pub position: isize,
}

/// `&[u8]` = 16 (fat pointer), isize = 8 => 24 bytes on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Scanner<'static>>() <= 24);

impl<'src> Scanner<'src> {
    /// Create a scanner over the UTF-8 bytes of `input`, positioned at 0.
    pub fn new(input: &'src str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Create a scanner over raw bytes, positioned at 0.
    ///
    /// The bytes need not be valid UTF-8.
    pub fn from_bytes(input: &'src [u8]) -> Self {
        trace!(len = input.len(), "scanner created");
        Scanner { input, position: 0 }
    }

    /// Read the byte at `position + offset` without moving the cursor.
    ///
    /// `offset` may be negative (lookbehind), zero, or positive (lookahead).
    /// Fails with [`ScanError::OutOfBounds`] unless `0 <= target < len`.
    /// An offset that overflows `isize` is out of bounds too; the reported
    /// target saturates.
    #[inline]
    pub fn peek(&self, offset: isize) -> Result<u8, ScanError> {
        let target = self.position.saturating_add(offset);
        let byte = self
            .position
            .checked_add(offset)
            .and_then(|t| usize::try_from(t).ok())
            .and_then(|t| self.input.get(t).copied());

        byte.ok_or_else(|| {
            trace!(
                position = self.position,
                offset,
                target,
                len = self.input.len(),
                "peek out of bounds"
            );
            ScanError::OutOfBounds {
                target,
                len: self.input.len(),
            }
        })
    }

    /// Returns `true` if the cursor is at or past the end of the input.
    ///
    /// Overshoot counts as end. A negative position never does.
    #[inline]
    pub fn is_end_of_string(&self) -> bool {
        usize::try_from(self.position).is_ok_and(|pos| pos >= self.input.len())
    }

    /// The whole input buffer, independent of the cursor.
    pub fn as_bytes(&self) -> &'src [u8] {
        self.input
    }

    /// Length of the input in bytes.
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Returns `true` if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Line and column of the current position, for diagnostics.
    ///
    /// Out-of-range positions are clamped to the nearest end.
    pub fn location(&self) -> SourceLocation {
        SourceLocation::of(self.input, self.position)
    }
}
