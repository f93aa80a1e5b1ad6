//! bitio/mod.rs
//! Bit Stream Ports: the byte/bit I/O capability the Huffman engine runs on.
//!
//! Notes:
//! - Bits are packed most-significant-bit first within each byte.
//! - The engine only sees the traits in `types.rs`; `InputStream` and
//!   `OutputStream` are the buffered implementations over `std::io`.
//! - `BitBuffer` is an in-memory port used for code inspection and tests.

pub mod types;
pub mod reader;
pub mod writer;
pub mod buffer;

pub use types::*;
pub use reader::*;
pub use writer::*;
pub use buffer::*;
