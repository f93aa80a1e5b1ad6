//! headers/types.rs
//! Decoded header view and header errors.

use crate::constants::HEADER_LEN;
use crate::frequency::FrequencyTable;

/// Parsed frequency header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyHeader {
    /// Per-symbol counts, ascending by symbol.
    pub table: FrequencyTable,
    /// Sum of all counts: how many symbols the decoder must recover.
    pub total_symbols: u64,
}

impl FrequencyHeader {
    /// Fixed header size in bytes.
    pub const LEN: usize = HEADER_LEN;

    pub fn new(table: FrequencyTable) -> Self {
        let total_symbols = table.total();
        Self { table, total_symbols }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// Buffer too short to contain the full header.
    #[error("header buffer too short: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    /// A count does not fit the persisted 16-bit field.
    #[error("count for symbol 0x{symbol:02x} is {count}, exceeds persisted maximum {max}")]
    CountOverflow { symbol: u8, count: u64, max: u64 },
}
