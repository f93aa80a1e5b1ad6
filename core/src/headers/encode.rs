//! headers/encode.rs
//!
//! Header encoding utilities.
//!
//! Design notes:
//! - Serializes a `FrequencyTable` into a fixed 512-byte buffer.
//! - Field order is symbol order 0..=255, one little-endian u16 each.
//! - Every count is range-checked before anything is written.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{COUNT_WIDTH, HEADER_LEN, MAX_PERSISTED_COUNT};
use crate::frequency::FrequencyTable;
use crate::headers::types::HeaderError;

/// Serialize a `FrequencyTable` into a 512-byte buffer in little-endian order.
///
/// # Returns
/// - `Ok([u8; HEADER_LEN])` containing the encoded header bytes.
/// - `Err(HeaderError::CountOverflow)` for the first count above `u16::MAX`.
pub fn encode_header_le(table: &FrequencyTable) -> Result<[u8; HEADER_LEN], HeaderError> {
    let mut out = [0u8; HEADER_LEN];

    for (symbol, (slot, &count)) in out
        .chunks_exact_mut(COUNT_WIDTH)
        .zip(table.counts().iter())
        .enumerate()
    {
        if count > MAX_PERSISTED_COUNT {
            return Err(HeaderError::CountOverflow {
                symbol: symbol as u8,
                count,
                max: MAX_PERSISTED_COUNT,
            });
        }
        LittleEndian::write_u16(slot, count as u16);
    }

    Ok(out)
}
