//! bitio/buffer.rs
//! In-memory bit port, readable and writable.

use crate::bitio::types::{BitIoError, BitSink, BitSource};

/// Packed MSB-first bit buffer with a read cursor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    bit_count: usize,
    cursor: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-packed bytes; every bit is readable.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec(), bit_count: bytes.len() * 8, cursor: 0 }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bits written.
    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    /// Bits not yet read.
    pub fn remaining(&self) -> usize {
        self.bit_count - self.cursor
    }

    pub fn bit(&self, index: usize) -> Option<bool> {
        (index < self.bit_count).then(|| (self.bytes[index / 8] >> (7 - index % 8)) & 1 == 1)
    }

    pub fn to_bits(&self) -> Vec<bool> {
        (0..self.bit_count).filter_map(|i| self.bit(i)).collect()
    }
}

impl BitSink for BitBuffer {
    fn write_bit(&mut self, bit: bool) -> Result<(), BitIoError> {
        let byte_index = self.bit_count / 8;
        if byte_index >= self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 1 << (7 - self.bit_count % 8);
        }
        self.bit_count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), BitIoError> {
        Ok(())
    }
}

impl BitSource for BitBuffer {
    fn read_bit(&mut self) -> Result<bool, BitIoError> {
        let bit = self.bit(self.cursor).ok_or(BitIoError::Exhausted)?;
        self.cursor += 1;
        Ok(bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_back() {
        let mut buf = BitBuffer::new();
        buf.write_bits(0b1101, 4).unwrap();
        assert_eq!(buf.as_bytes(), &[0b1101_0000]);
        assert_eq!(buf.to_bits(), vec![true, true, false, true]);

        let got: Vec<bool> = (0..4).map(|_| buf.read_bit().unwrap()).collect();
        assert_eq!(got, vec![true, true, false, true]);
        assert!(matches!(buf.read_bit(), Err(BitIoError::Exhausted)));
    }
}
