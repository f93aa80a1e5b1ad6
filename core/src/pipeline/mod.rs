//! pipeline/mod.rs
//! Whole-file compress and decompress orchestration.
//!
//! Notes:
//! - Compress makes two passes over a seekable input: frequency scan, then
//!   encode. The input is rewound in between.
//! - Decompress stops after exactly the header's symbol count, so padding
//!   bits in the last byte are never interpreted.
//! - Empty input maps to empty output in both directions.

pub mod io;
pub mod compress;
pub mod decompress;

pub use io::*;
pub use compress::*;
pub use decompress::*;
