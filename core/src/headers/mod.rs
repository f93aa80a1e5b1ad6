//! headers/mod.rs
//! Public module export for the frequency header.
//!
//! Notes:
//! - Fixed-size header (512 bytes) enables deterministic IO: the payload
//!   always starts at byte 512.
//! - Only counts are persisted; the decoder rebuilds the identical tree from
//!   them, so the tree layout never needs to travel.
//! - The symbol total is derived from the counts, never stored separately.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;

// ## Implementation notes

// - Endianness: little-endian for every 16-bit count.
// - Width: counts above u16::MAX are rejected at encode time; the layout
//   itself has no version field, so widening it would be a new format.
