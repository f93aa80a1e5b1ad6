//! bitio/reader.rs
//! Buffered input port over any seekable reader.

use std::io::{self, BufReader, Read, Seek, SeekFrom};

use crate::bitio::types::{BitIoError, BitSource, ByteSource};
use crate::constants::DEFAULT_IO_BUFFER;

/// Reads bytes and MSB-first bits from a seekable reader.
///
/// The size is measured once at construction, from the reader's current
/// position to its end; `rewind` returns to that starting position.
#[derive(Debug)]
pub struct InputStream<R: Read + Seek> {
    inner: BufReader<R>,
    start: u64,
    size: u64,
    consumed: u64,
    bit_buf: u8,
    bits_left: u8,
}

impl<R: Read + Seek> InputStream<R> {
    pub fn new(reader: R) -> Result<Self, BitIoError> {
        Self::with_capacity(DEFAULT_IO_BUFFER, reader)
    }

    pub fn with_capacity(capacity: usize, mut reader: R) -> Result<Self, BitIoError> {
        let start = reader.stream_position()?;
        let end = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(start))?;

        Ok(Self {
            inner: BufReader::with_capacity(capacity, reader),
            start,
            size: end.saturating_sub(start),
            consumed: 0,
            bit_buf: 0,
            bits_left: 0,
        })
    }

    /// Bytes consumed since construction or the last rewind.
    pub fn position(&self) -> u64 {
        self.consumed
    }

    /// Fill `buf` completely, byte-aligned.
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), BitIoError> {
        self.bits_left = 0;
        self.inner.read_exact(buf).map_err(eof_to_exhausted)?;
        self.consumed += buf.len() as u64;
        Ok(())
    }

    fn next_raw(&mut self) -> Result<u8, BitIoError> {
        let mut byte = [0u8; 1];
        self.inner.read_exact(&mut byte).map_err(eof_to_exhausted)?;
        self.consumed += 1;
        Ok(byte[0])
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

fn eof_to_exhausted(e: io::Error) -> BitIoError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        BitIoError::Exhausted
    } else {
        BitIoError::Io(e)
    }
}

impl<R: Read + Seek> ByteSource for InputStream<R> {
    fn read_byte(&mut self) -> Result<u8, BitIoError> {
        self.bits_left = 0;
        self.next_raw()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn good(&self) -> bool {
        self.bits_left > 0 || self.consumed < self.size
    }

    fn rewind(&mut self) -> Result<(), BitIoError> {
        // BufReader::seek drops its internal buffer.
        self.inner.seek(SeekFrom::Start(self.start))?;
        self.consumed = 0;
        self.bit_buf = 0;
        self.bits_left = 0;
        Ok(())
    }
}

impl<R: Read + Seek> BitSource for InputStream<R> {
    fn read_bit(&mut self) -> Result<bool, BitIoError> {
        if self.bits_left == 0 {
            self.bit_buf = self.next_raw()?;
            self.bits_left = 8;
        }
        self.bits_left -= 1;
        Ok((self.bit_buf >> self.bits_left) & 1 == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn size_is_measured_from_current_position() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3, 4, 5]);
        cursor.set_position(2);
        let mut input = InputStream::new(cursor).unwrap();
        assert_eq!(input.size(), 3);
        assert_eq!(input.read_byte().unwrap(), 3);
        input.rewind().unwrap();
        assert_eq!(input.read_byte().unwrap(), 3);
    }

    #[test]
    fn byte_read_discards_partial_bits() {
        let mut input = InputStream::new(Cursor::new(vec![0b1000_0000, 0x7F])).unwrap();
        assert!(input.read_bit().unwrap());
        assert_eq!(input.read_byte().unwrap(), 0x7F);
        assert!(!input.good());
    }
}
