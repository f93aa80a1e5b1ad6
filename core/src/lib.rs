//! huffpack-core
//!
//! Static Huffman coding engine.
//! A 512-byte frequency header followed by an MSB-first bit-packed payload.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

// Engine layers, leaf-first
pub mod bitio;
pub mod frequency;
pub mod headers;
pub mod huffman;
pub mod telemetry;

// Whole-file orchestration
pub mod pipeline;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::PipelineConfig;
    pub use crate::frequency::FrequencyTable;
    pub use crate::huffman::{Code, HuffmanTree};
    pub use crate::pipeline::{
        compress_bytes, compress_file, compress_stream, decompress_bytes, decompress_file,
        decompress_stream,
    };
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::StreamError;
}
