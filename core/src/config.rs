//! config.rs
//! Pipeline configuration.
//!
//! Only buffering is tunable: the on-disk format has no knobs, so the encoder
//! and decoder can never disagree on layout.

use crate::constants::{DEFAULT_IO_BUFFER, ENV_IO_BUFFER, MAX_IO_BUFFER, MIN_IO_BUFFER};
use crate::types::StreamError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Capacity of the buffered reader and writer wrapped around each side.
    pub io_buffer_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { io_buffer_size: DEFAULT_IO_BUFFER }
    }
}

impl PipelineConfig {
    /// Set the buffer capacity, clamped to `[MIN_IO_BUFFER, MAX_IO_BUFFER]`.
    pub fn with_io_buffer_size(mut self, size: usize) -> Self {
        self.io_buffer_size = size.clamp(MIN_IO_BUFFER, MAX_IO_BUFFER);
        self
    }

    /// Build a config from the environment.
    ///
    /// `HUFFPACK_IO_BUFFER` overrides the buffer capacity (in bytes). An unset
    /// variable yields the default; a value that is not an integer is an error.
    pub fn from_env() -> Result<Self, StreamError> {
        match std::env::var(ENV_IO_BUFFER) {
            Ok(raw) => Self::from_env_value(&raw),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(StreamError::Config(format!("{ENV_IO_BUFFER}: {e}"))),
        }
    }

    fn from_env_value(raw: &str) -> Result<Self, StreamError> {
        let size = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| StreamError::Config(format!("{ENV_IO_BUFFER}={raw:?}: {e}")))?;
        Ok(Self::default().with_io_buffer_size(size))
    }
}
