//! Error types for BytePress operations.

use std::io;
use thiserror::Error;

/// The main error type for bit-level stream operations.
#[derive(Debug, Error)]
pub enum BytePressError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unexpected end of input.
    ///
    /// Bit reads are all-or-nothing: when fewer bits remain than were
    /// requested, nothing is returned and the bits already buffered stay
    /// available for a smaller subsequent read.
    #[error("Unexpected end of input: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },
}

/// Result type alias for BytePress operations.
pub type Result<T> = std::result::Result<T, BytePressError>;

impl BytePressError {
    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Whether this error is the end-of-input condition rather than a
    /// genuine I/O failure.
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}
