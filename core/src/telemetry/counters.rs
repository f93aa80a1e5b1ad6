//! telemetry/counters.rs
//! Mutable counters used during a compress or decompress run.
//!
//! Converted into an immutable `TelemetrySnapshot` at pipeline end.
use serde::{Deserialize, Serialize};

/// Deterministic counters collected during one run.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Bytes read from the input file.
    pub bytes_input: u64,
    /// Bytes written to the output file.
    pub bytes_output: u64,
    /// Header bytes (0 or 512).
    pub bytes_header: u64,
    /// Encoded payload size in bits, before padding.
    pub payload_bits: u64,
    /// Symbols encoded or decoded.
    pub symbols: u64,
    /// Distinct symbols present in the frequency table.
    pub distinct_symbols: u64,
}

impl TelemetryCounters {
    /// Record the frequency header.
    pub fn add_header(&mut self, header_len: usize, distinct: usize) {
        self.bytes_header += header_len as u64;
        self.distinct_symbols = distinct as u64;
    }

    /// Record one symbol transcoded with a code of `code_len` bits.
    #[inline]
    pub fn add_symbol(&mut self, code_len: u8) {
        self.symbols += 1;
        self.payload_bits += u64::from(code_len);
    }
}
