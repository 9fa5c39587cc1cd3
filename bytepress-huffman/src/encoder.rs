//! The compression loop.
//!
//! Output layout: `[serialized tree][codeword payload][sentinel codeword]
//! [zero padding to a byte boundary]`. There is no length prefix, no
//! checksum and no magic number: the tree's self-delimiting encoding
//! marks where the payload begins and the sentinel codeword marks where
//! it ends. The tree header is padded to a byte boundary so the payload
//! always occupies a whole number of bytes on its own.

use crate::error::Result;
use crate::table::EncodingTable;
use crate::tree::{PrefixTree, Symbol};
use bytepress_core::bitstream::BitWriter;
use std::io::{Read, Write};

/// Compress `input` to `output` with the code described by `tree`.
///
/// The tree must carry a leaf for every byte value present in the input
/// (plus the sentinel); encoding fails with
/// [`UnknownSymbol`](crate::HuffmanError::UnknownSymbol) otherwise.
/// The output is flushed before returning, and buffered bits are flushed
/// best-effort even on the error paths.
pub fn compress<R: Read, W: Write>(tree: &PrefixTree, mut input: R, output: W) -> Result<()> {
    let table = EncodingTable::from_tree(tree);
    let mut writer = BitWriter::new(output);

    tree.write_to(&mut writer)?;
    writer.align_to_byte()?;

    let mut buf = [0u8; 8192];
    loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for &byte in &buf[..n] {
            table.encode_symbol(Symbol::Byte(byte), &mut writer)?;
        }
    }

    // Terminate the payload, then pad the partial byte with zero bits.
    table.encode_symbol(Symbol::EndOfStream, &mut writer)?;
    writer.align_to_byte()?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ByteFrequencies, build_tree};
    use crate::error::HuffmanError;

    fn sample_tree() -> PrefixTree {
        // A: 0, B: 10, EOS: 11
        PrefixTree::branch(
            PrefixTree::leaf(Symbol::Byte(b'A')),
            PrefixTree::branch(
                PrefixTree::leaf(Symbol::Byte(b'B')),
                PrefixTree::leaf(Symbol::EndOfStream),
            ),
        )
    }

    fn tree_header_len(tree: &PrefixTree) -> usize {
        let mut bytes = Vec::new();
        {
            let mut writer = BitWriter::new(&mut bytes);
            tree.write_to(&mut writer).unwrap();
            writer.flush().unwrap();
        }
        bytes.len()
    }

    #[test]
    fn test_payload_bits_for_known_code() {
        let tree = sample_tree();
        let mut compressed = Vec::new();
        compress(&tree, &b"ABA"[..], &mut compressed).unwrap();

        // A B A EOS = 0 10 0 11, padded with two zero bits.
        let header_len = tree_header_len(&tree);
        assert_eq!(&compressed[header_len..], &[0b0100_1100]);
    }

    #[test]
    fn test_header_is_byte_aligned() {
        let tree = sample_tree();
        let mut compressed = Vec::new();
        compress(&tree, &b"AB"[..], &mut compressed).unwrap();

        // The compressed stream starts with the standalone serialization
        // of the tree, byte for byte.
        let mut header = Vec::new();
        {
            let mut writer = BitWriter::new(&mut header);
            tree.write_to(&mut writer).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(&compressed[..header.len()], &header[..]);
    }

    #[test]
    fn test_empty_input_emits_only_header_and_sentinel() {
        let tree = build_tree(&ByteFrequencies::new());
        let mut compressed = Vec::new();
        compress(&tree, &b""[..], &mut compressed).unwrap();

        // Sentinel-only tree: the sentinel codeword is empty, so the
        // stream is exactly the aligned tree header.
        assert_eq!(compressed.len(), tree_header_len(&tree));
    }

    #[test]
    fn test_byte_outside_alphabet_fails() {
        let tree = sample_tree();
        let mut compressed = Vec::new();
        let err = compress(&tree, &b"AXB"[..], &mut compressed).unwrap_err();
        assert!(matches!(err, HuffmanError::UnknownSymbol { .. }));
    }
}
