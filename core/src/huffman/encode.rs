//! huffman/encode.rs
//! Symbol -> code, by walking parent links from the leaf to the root.

use crate::bitio::BitSink;
use crate::constants::SYMBOL_COUNT;
use crate::frequency::FrequencyTable;
use crate::huffman::types::{Code, HuffmanError, HuffmanTree, NodeId};

impl HuffmanTree {
    /// Write the code for `symbol` to `sink`, most significant bit first.
    ///
    /// A degenerate single-leaf tree writes nothing; the decoder mirrors this
    /// by consuming nothing.
    pub fn encode<S: BitSink>(&self, symbol: u8, sink: &mut S) -> Result<(), HuffmanError> {
        let leaf = self.leaf(symbol).ok_or(HuffmanError::SymbolNotPresent { symbol })?;

        // Depth is at most 255 with 256 leaves.
        let mut path = [false; SYMBOL_COUNT];
        let depth = self.walk_to_root(leaf, &mut path);

        for &bit in path[..depth].iter().rev() {
            sink.write_bit(bit)?;
        }
        Ok(())
    }

    /// The code for `symbol` as a value, or `None` if it has no leaf.
    pub fn code(&self, symbol: u8) -> Option<Code> {
        let leaf = self.leaf(symbol)?;
        let mut path = [false; SYMBOL_COUNT];
        let depth = self.walk_to_root(leaf, &mut path);
        Some(Code::from_bits(path[..depth].iter().rev().copied().collect()))
    }

    /// Code length of every symbol; 0 for absent symbols.
    pub fn code_lengths(&self) -> [u8; SYMBOL_COUNT] {
        let mut lengths = [0u8; SYMBOL_COUNT];
        let mut scratch = [false; SYMBOL_COUNT];
        for symbol in self.symbols() {
            if let Some(leaf) = self.leaf(symbol) {
                lengths[symbol as usize] = self.walk_to_root(leaf, &mut scratch) as u8;
            }
        }
        lengths
    }

    /// Payload size in bits when every symbol of `table` is encoded.
    pub fn encoded_bits(&self, table: &FrequencyTable) -> u64 {
        let lengths = self.code_lengths();
        table
            .present()
            .map(|(symbol, count)| count * u64::from(lengths[symbol as usize]))
            .sum()
    }

    /// Record the leaf-to-root path into `path` (leaf end first) and
    /// return its length.
    fn walk_to_root(&self, leaf: NodeId, path: &mut [bool; SYMBOL_COUNT]) -> usize {
        let mut depth = 0;
        let mut current = leaf;
        while let Some(parent) = self.node(current).parent() {
            path[depth] = matches!(self.node(parent).children(), Some([_, one]) if one == current);
            depth += 1;
            current = parent;
        }
        depth
    }
}
