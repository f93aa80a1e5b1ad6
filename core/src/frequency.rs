//! frequency.rs
//! Per-symbol occurrence counts over one whole input.

use crate::bitio::{BitIoError, ByteSource};
use crate::constants::SYMBOL_COUNT;

/// Fixed 256-entry count table, indexed by byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self { counts: [0; SYMBOL_COUNT] }
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_counts(counts: [u64; SYMBOL_COUNT]) -> Self {
        Self { counts }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.increment(byte);
        }
        table
    }

    /// Scan exactly `source.size()` bytes, then rewind the source so the
    /// same data can be read again for encoding.
    pub fn from_source<S: ByteSource>(source: &mut S) -> Result<Self, BitIoError> {
        let mut table = Self::new();
        let size = source.size();
        let mut scanned = 0u64;
        while source.good() && scanned < size {
            table.increment(source.read_byte()?);
            scanned += 1;
        }
        source.rewind()?;
        Ok(table)
    }

    #[inline]
    pub fn increment(&mut self, symbol: u8) {
        self.counts[symbol as usize] += 1;
    }

    #[inline]
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    pub fn counts(&self) -> &[u64; SYMBOL_COUNT] {
        &self.counts
    }

    /// Sum of all counts: the number of symbols in the source.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// `(symbol, count)` for every present symbol, ascending by symbol.
    pub fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}
