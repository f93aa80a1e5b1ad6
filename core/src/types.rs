use std::io;

use crate::bitio::BitIoError;
use crate::headers::HeaderError;
use crate::huffman::HuffmanError;

/// Unified stream error covering I/O, header, tree, and malformed input.
/// - `From<T>` impls enable `?` across the pipeline.
/// - Messages are stable and contextual for logs.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// I/O error opening, reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Bit-level port failure.
    #[error("bit stream error: {0}")]
    BitIo(#[from] BitIoError),

    /// Header encode/decode failure.
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    /// Tree build/encode/decode failure.
    #[error("huffman error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Compressed input is shorter than the fixed header.
    #[error("compressed input truncated: {have} bytes, header needs {need}")]
    TruncatedHeader { have: u64, need: u64 },

    /// Payload ran out before the header's symbol count was reached.
    #[error("compressed payload truncated: decoded {decoded} of {expected} symbols")]
    TruncatedPayload { decoded: u64, expected: u64 },

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),
}
