//! Line/column lookup for byte positions.
//!
//! The scanner itself is purely offset-based. Locations are computed on
//! demand for diagnostics by counting newlines before the position.

use std::fmt;

/// Human-readable location of a byte position.
///
/// `line` is 1-based. `column` is the 0-based byte offset within the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// Locate `position` within `input`.
    ///
    /// The position is clamped to `[0, input.len()]` so a cursor that has
    /// overshot either end still maps to the nearest real location.
    pub fn of(input: &[u8], position: isize) -> Self {
        let pos = usize::try_from(position).map_or(0, |p| p.min(input.len()));
        let before = &input[..pos];

        let newlines = memchr::memchr_iter(b'\n', before).count();
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |i| i + 1);

        SourceLocation {
            line: u32::try_from(newlines)
                .unwrap_or(u32::MAX)
                .saturating_add(1),
            column: u32::try_from(pos - line_start).unwrap_or(u32::MAX),
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        SourceLocation { line: 1, column: 0 }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
