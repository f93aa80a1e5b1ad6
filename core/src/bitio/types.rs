//! bitio/types.rs
//! Port traits and the bit-level error type.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum BitIoError {
    /// Underlying reader or writer failed.
    #[error("bit stream I/O error: {0}")]
    Io(#[from] io::Error),

    /// A read was issued after the source ran out of data.
    #[error("bit stream exhausted")]
    Exhausted,
}

/// Sequential byte access with a known total size and a rewindable cursor.
pub trait ByteSource {
    /// Read the next byte. Any partially consumed bit buffer is discarded.
    fn read_byte(&mut self) -> Result<u8, BitIoError>;

    /// Total size of the underlying data in bytes.
    fn size(&self) -> u64;

    /// True while more data is available.
    fn good(&self) -> bool;

    /// Move the read cursor back to the start of the data.
    fn rewind(&mut self) -> Result<(), BitIoError>;
}

/// Sequential single-bit reads.
pub trait BitSource {
    fn read_bit(&mut self) -> Result<bool, BitIoError>;
}

/// Buffered single-bit writes.
pub trait BitSink {
    fn write_bit(&mut self, bit: bool) -> Result<(), BitIoError>;

    /// Write the low `count` bits of `value`, most significant first.
    fn write_bits(&mut self, value: u64, count: u8) -> Result<(), BitIoError> {
        debug_assert!(count <= 64);
        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1)?;
        }
        Ok(())
    }

    /// Force any partial byte out, padding the unused low bits with zeros.
    fn flush(&mut self) -> Result<(), BitIoError>;
}
