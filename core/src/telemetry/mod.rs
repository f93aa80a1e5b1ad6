//! telemetry/mod.rs
//! Unified telemetry module: counters, timers, and immutable snapshots.
//!
//! Notes:
//! - Compression ratio: `bytes_output / bytes_input`.
//! - Mean code length: payload bits per source symbol.
//! - Stage timers give per-phase visibility (scan, build, encode, ...).
//! - Snapshots are immutable and serde-serializable for logs and tooling.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
