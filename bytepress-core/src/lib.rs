//! # BytePress Core
//!
//! Core components for the BytePress compression library.
//!
//! This crate provides the fundamental building blocks shared by the codec
//! and CLI crates:
//!
//! - [`bitstream`]: Bit-level I/O for variable-length prefix codes
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! BytePress is a layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ bytepress-cli                               │
//! │     compress / decompress commands          │
//! ├─────────────────────────────────────────────┤
//! │ bytepress-huffman                           │
//! │     PrefixTree, EncodingTable, stream codec │
//! ├─────────────────────────────────────────────┤
//! │ bytepress-core (this crate)                 │
//! │     BitReader / BitWriter                   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bytepress_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut encoded = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut encoded);
//!     writer.write_bits(0b1011, 4).unwrap();
//!     writer.flush().unwrap();
//! }
//!
//! let mut reader = BitReader::new(Cursor::new(encoded));
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1011);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{BytePressError, Result};
