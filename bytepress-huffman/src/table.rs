//! The symbol-to-codeword encoding table.
//!
//! Decoding only needs the tree, but encoding needs the reverse mapping:
//! for each symbol, the root-to-leaf bit path that reaches its leaf. The
//! table is derived once per tree and consumed read-only by the encode
//! loop. Because it comes from a valid prefix tree, the mapping is
//! injective and prefix-free, which is exactly what makes it decodable.

use crate::error::{HuffmanError, Result};
use crate::tree::{PrefixTree, SYMBOL_SPACE, Symbol};
use bytepress_core::bitstream::BitWriter;
use std::io::Write;

/// Mapping from [`Symbol`] to its codeword, dense over the 257-value
/// symbol space. Symbols without a leaf in the source tree have no entry.
#[derive(Debug, Clone)]
pub struct EncodingTable {
    /// Codewords indexed by symbol wire code.
    codes: Vec<Option<Box<[bool]>>>,
}

impl EncodingTable {
    /// Build the table by walking every root-to-leaf path of `tree`.
    pub fn from_tree(tree: &PrefixTree) -> Self {
        let mut codes = vec![None; SYMBOL_SPACE];
        let mut path = Vec::new();
        Self::collect(tree, &mut path, &mut codes);
        Self { codes }
    }

    fn collect(node: &PrefixTree, path: &mut Vec<bool>, codes: &mut [Option<Box<[bool]>>]) {
        match node {
            PrefixTree::Leaf(symbol) => {
                codes[symbol.code() as usize] = Some(path.clone().into_boxed_slice());
            }
            PrefixTree::Branch { left, right } => {
                path.push(false);
                Self::collect(left, path, codes);
                path.pop();

                path.push(true);
                Self::collect(right, path, codes);
                path.pop();
            }
        }
    }

    /// Look up the codeword for a symbol, in traversal order
    /// (`false` = left, `true` = right).
    pub fn codeword(&self, symbol: Symbol) -> Option<&[bool]> {
        self.codes[symbol.code() as usize].as_deref()
    }

    /// Number of symbols the table has codewords for.
    pub fn symbol_count(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    /// Encode one symbol by writing its codeword bits to `writer`.
    ///
    /// Fails with [`HuffmanError::UnknownSymbol`] when the table has no
    /// codeword for `symbol`: the tree was not built from the input's
    /// alphabet, a broken invariant rather than a data error.
    pub fn encode_symbol<W: Write>(&self, symbol: Symbol, writer: &mut BitWriter<W>) -> Result<()> {
        let codeword = self
            .codeword(symbol)
            .ok_or_else(|| HuffmanError::unknown_symbol(symbol))?;
        for &bit in codeword {
            writer.write_bit(bit)?;
        }
        Ok(())
    }
}
