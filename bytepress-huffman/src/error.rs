//! Huffman-specific error types.

use crate::tree::Symbol;
use bytepress_core::BytePressError;
use std::io;
use thiserror::Error;

/// Huffman compression/decompression errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// I/O error on the byte-granular side of a codec (uncompressed input
    /// during compression, uncompressed output during decompression).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The serialized tree description is invalid or ends prematurely.
    #[error("Malformed tree at bit {bit_position}: {message}")]
    MalformedTree {
        /// Bit position in the compressed stream where the problem surfaced.
        bit_position: u64,
        /// Description of the problem.
        message: String,
    },

    /// Encode-time lookup miss: the encoding table has no codeword for the
    /// requested symbol. The table does not cover the input's alphabet.
    #[error("No codeword for {symbol}")]
    UnknownSymbol {
        /// The symbol that was not found.
        symbol: Symbol,
    },

    /// Error from the bit-granular side of a codec. Carries the
    /// end-of-input condition; see [`HuffmanError::is_end_of_input`].
    #[error(transparent)]
    Bits(#[from] BytePressError),
}

/// Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;

impl HuffmanError {
    /// Create a malformed tree error.
    pub fn malformed_tree(bit_position: u64, message: impl Into<String>) -> Self {
        Self::MalformedTree {
            bit_position,
            message: message.into(),
        }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: Symbol) -> Self {
        Self::UnknownSymbol { symbol }
    }

    /// Whether this error is the compressed stream running out of bits.
    ///
    /// During decompression this is the truncated-stream condition the
    /// decode loop treats as normal termination; everywhere else it is
    /// fatal.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::Bits(e) if e.is_unexpected_eof())
    }
}
