//! huffman/mod.rs
//! Static Huffman coding tree.
//!
//! Notes:
//! - Nodes live in an arena owned by the tree and are addressed by `NodeId`;
//!   dropping the tree releases every node at once.
//! - Parent links are plain indices used only by the encode walk.
//! - Construction is a pure function of the frequency table, so the encoder
//!   and the decoder derive identical codes independently.

pub mod types;
pub mod build;
pub mod encode;
pub mod decode;
pub mod topology;

pub use types::*;
