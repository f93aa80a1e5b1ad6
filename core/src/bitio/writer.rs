//! bitio/writer.rs
//! Buffered output port over any writer.

use std::io::{BufWriter, Write};

use crate::bitio::types::{BitIoError, BitSink};
use crate::constants::DEFAULT_IO_BUFFER;

/// Writes MSB-first bits and byte-aligned blocks to a writer.
///
/// Bits accumulate in a one-byte buffer; a full byte is handed to the
/// underlying `BufWriter` immediately. `flush` pads the partial byte with
/// zeros. Dropping the stream without flushing loses the partial byte.
#[derive(Debug)]
pub struct OutputStream<W: Write> {
    inner: BufWriter<W>,
    bit_buf: u8,
    bit_count: u8,
    bytes_written: u64,
}

impl<W: Write> OutputStream<W> {
    pub fn new(writer: W) -> Self {
        Self::with_capacity(DEFAULT_IO_BUFFER, writer)
    }

    pub fn with_capacity(capacity: usize, writer: W) -> Self {
        Self {
            inner: BufWriter::with_capacity(capacity, writer),
            bit_buf: 0,
            bit_count: 0,
            bytes_written: 0,
        }
    }

    /// Write a byte-aligned block. Pending bits are padded out first.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BitIoError> {
        self.flush_bits()?;
        self.inner.write_all(bytes)?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Bytes handed to the underlying writer so far (excludes pending bits).
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Bits waiting in the partial byte.
    pub fn pending_bits(&self) -> u8 {
        self.bit_count
    }

    /// Flush everything and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W, BitIoError> {
        BitSink::flush(&mut self)?;
        self.inner.into_inner().map_err(|e| BitIoError::Io(e.into_error()))
    }

    fn flush_bits(&mut self) -> Result<(), BitIoError> {
        if self.bit_count > 0 {
            self.inner.write_all(&[self.bit_buf])?;
            self.bytes_written += 1;
            self.bit_buf = 0;
            self.bit_count = 0;
        }
        Ok(())
    }
}

impl<W: Write> BitSink for OutputStream<W> {
    fn write_bit(&mut self, bit: bool) -> Result<(), BitIoError> {
        if bit {
            self.bit_buf |= 1 << (7 - self.bit_count);
        }
        self.bit_count += 1;
        if self.bit_count == 8 {
            self.flush_bits()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), BitIoError> {
        self.flush_bits()?;
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_byte_is_zero_padded() {
        let mut out = OutputStream::new(Vec::new());
        out.write_bits(0b101, 3).unwrap();
        assert_eq!(out.pending_bits(), 3);
        let bytes = out.into_inner().unwrap();
        assert_eq!(bytes, vec![0b1010_0000]);
    }

    #[test]
    fn write_bytes_realigns() {
        let mut out = OutputStream::new(Vec::new());
        out.write_bit(true).unwrap();
        out.write_bytes(&[0xAB]).unwrap();
        assert_eq!(out.bytes_written(), 2);
        assert_eq!(out.into_inner().unwrap(), vec![0x80, 0xAB]);
    }
}
