//! The decompression loop.
//!
//! Reads the serialized tree from the head of the compressed stream, then
//! walks codeword after codeword until the end-of-stream sentinel is
//! decoded. The sentinel is an ordinary leaf of the tree, reached exactly
//! like any other symbol: the code-defined terminator, not a side
//! channel.

use crate::error::Result;
use crate::tree::{PrefixTree, Symbol};
use bytepress_core::bitstream::BitReader;
use std::io::{Read, Write};

/// Decompress `input` to `output`.
///
/// A stream that ends mid-codeword before the sentinel is treated as
/// truncated, not corrupt: decoding stops and every fully decoded byte is
/// kept. The trailing padding bits of a well-formed stream are absorbed
/// by the same rule when they are too short to complete a codeword.
/// The output is flushed on every exit path.
pub fn decompress<R: Read, W: Write>(input: R, mut output: W) -> Result<()> {
    let mut reader = BitReader::new(input);

    let tree = PrefixTree::read_from(&mut reader)?;
    reader.align_to_byte();

    loop {
        match tree.decode_symbol(&mut reader) {
            Ok(Symbol::Byte(value)) => {
                if let Err(e) = output.write_all(&[value]) {
                    let _ = output.flush();
                    return Err(e.into());
                }
            }
            Ok(Symbol::EndOfStream) => break,
            Err(e) if e.is_end_of_input() => break,
            Err(e) => {
                let _ = output.flush();
                return Err(e);
            }
        }
    }

    output.flush()?;
    Ok(())
}
