//! huffman/decode.rs
//! Bits -> symbol, by descending from the root.

use crate::bitio::BitSource;
use crate::huffman::types::{HuffmanError, HuffmanTree};

impl HuffmanTree {
    /// Read one code from `source` and return its symbol.
    ///
    /// Bit 0 selects the zero-child, bit 1 the one-child. A root leaf returns
    /// its symbol without reading. Running out of bits mid-code surfaces as
    /// `HuffmanError::BitIo(BitIoError::Exhausted)`.
    pub fn decode<S: BitSource>(&self, source: &mut S) -> Result<u8, HuffmanError> {
        let mut current = self.node(self.root);
        while let Some([zero, one]) = current.children() {
            let next = if source.read_bit()? { one } else { zero };
            current = self.node(next);
        }
        Ok(current.symbol)
    }
}
