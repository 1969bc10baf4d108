//! Bounds-checked read cursor over an immutable input buffer.
//!
//! `scan_core` is the foundation a lexer sits on, not a lexer itself. It
//! provides a [`Scanner`] with relative byte lookahead/lookbehind and an
//! end-of-input predicate. Token recognition, consumption, and everything
//! above it are the caller's job.
//!
//! # Usage
//!
//! ```
//! use scan_core::{ScanError, Scanner};
//!
//! let mut scanner = Scanner::new("let x");
//! assert_eq!(scanner.peek(0), Ok(b'l'));
//!
//! // The caller owns the cursor and advances it directly.
//! scanner.position += 3;
//! assert_eq!(scanner.peek(1), Ok(b'x'));
//! assert_eq!(
//!     scanner.peek(2),
//!     Err(ScanError::OutOfBounds { target: 5, len: 5 })
//! );
//! ```

mod location;
mod scan_error;
mod scanner;

pub use location::SourceLocation;
pub use scan_error::{ScanError, ScanErrorCode};
pub use scanner::Scanner;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=scan_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
