//! constants.rs
//! Format constants and configuration bounds shared by every layer.

/// Number of distinct symbols (one per byte value).
pub const SYMBOL_COUNT: usize = 256;

/// Width in bytes of one persisted frequency count.
pub const COUNT_WIDTH: usize = 2;

/// Fixed frequency header size in bytes (256 x u16).
pub const HEADER_LEN: usize = SYMBOL_COUNT * COUNT_WIDTH;

/// Largest count the 16-bit header field can hold.
pub const MAX_PERSISTED_COUNT: u64 = u16::MAX as u64;

/// Defaults when no buffer size is configured.
pub const DEFAULT_IO_BUFFER: usize = 64 * 1024; // 64 KiB
/// Lower bound for buffered reader/writer capacity.
pub const MIN_IO_BUFFER: usize = 512;
/// Upper bound for buffered reader/writer capacity (16 MiB).
pub const MAX_IO_BUFFER: usize = 16 * 1024 * 1024;

/// Environment variable consulted by `PipelineConfig::from_env`.
pub const ENV_IO_BUFFER: &str = "HUFFPACK_IO_BUFFER";
