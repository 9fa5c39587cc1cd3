//! # BytePress Huffman
//!
//! Lossless byte-stream compression built on a Huffman prefix code.
//!
//! ## Features
//!
//! - **Pure Rust**: no C dependencies, no unsafe code
//! - **Self-describing streams**: the prefix tree travels at the head of
//!   the compressed stream as a tagged pre-order bit encoding, so the
//!   decoder needs no side-channel frequency table
//! - **Sentinel termination**: a reserved end-of-stream symbol, coded
//!   like any byte, marks the end of the payload; no length prefix
//! - **Truncation tolerant**: a stream cut before the sentinel decodes to
//!   the bytes that were fully present
//!
//! ## Stream layout
//!
//! ```text
//! [serialized tree][codeword payload][sentinel codeword][zero padding]
//! ```
//!
//! The tree header is padded to a byte boundary; the payload (sentinel
//! and padding included) always occupies a whole number of bytes.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_huffman::{compress_bytes, decompress_bytes};
//!
//! let original = b"so much repetition, so little entropy";
//!
//! let compressed = compress_bytes(original).unwrap();
//! let restored = decompress_bytes(&compressed).unwrap();
//!
//! assert_eq!(restored, original);
//! ```
//!
//! For streaming I/O, build a tree explicitly and use [`compress`] /
//! [`decompress`] over any `Read`/`Write` pair:
//!
//! ```rust
//! use bytepress_huffman::{ByteFrequencies, build_tree, compress, decompress};
//!
//! let data = b"streamed through readers and writers";
//! let tree = build_tree(&ByteFrequencies::from_bytes(data));
//!
//! let mut compressed = Vec::new();
//! compress(&tree, &data[..], &mut compressed).unwrap();
//!
//! let mut restored = Vec::new();
//! decompress(&compressed[..], &mut restored).unwrap();
//! assert_eq!(restored, data);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod builder;
mod decoder;
mod encoder;
mod error;
mod table;
mod tree;

pub use builder::{ByteFrequencies, build_tree};
pub use decoder::decompress;
pub use encoder::compress;
pub use error::{HuffmanError, Result};
pub use table::EncodingTable;
pub use tree::{MAX_TREE_DEPTH, PrefixTree, SYMBOL_SPACE, Symbol};

/// Compress a byte slice with a Huffman code built from its own byte
/// frequencies.
///
/// # Example
///
/// ```rust
/// use bytepress_huffman::compress_bytes;
///
/// let compressed = compress_bytes(b"AAAAAAAABBBBCC").unwrap();
/// assert!(!compressed.is_empty());
/// ```
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let tree = build_tree(&ByteFrequencies::from_bytes(data));
    let mut output = Vec::new();
    compress(&tree, data, &mut output)?;
    Ok(output)
}

/// Decompress a byte slice produced by [`compress_bytes`] or
/// [`compress`].
///
/// # Example
///
/// ```rust
/// use bytepress_huffman::{compress_bytes, decompress_bytes};
///
/// let compressed = compress_bytes(b"round and round").unwrap();
/// assert_eq!(decompress_bytes(&compressed).unwrap(), b"round and round");
/// ```
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decompress(data, &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_simple() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = compress_bytes(original).unwrap();
        let restored = decompress_bytes(&compressed).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress_bytes(b"").unwrap();
        let restored = decompress_bytes(&compressed).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_single_byte() {
        let compressed = compress_bytes(b"A").unwrap();
        assert_eq!(decompress_bytes(&compressed).unwrap(), b"A");
    }

    #[test]
    fn test_repeating_pattern_compresses() {
        let original = vec![b'X'; 1000];
        let compressed = compress_bytes(&original).unwrap();

        // One-bit codewords: roughly an eighth of the input plus the header.
        assert!(compressed.len() < original.len() / 2);
        assert_eq!(decompress_bytes(&compressed).unwrap(), original);
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let compressed = compress_bytes(&original).unwrap();
        assert_eq!(decompress_bytes(&compressed).unwrap(), original);
    }
}
