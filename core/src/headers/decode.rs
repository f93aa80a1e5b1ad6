//! headers/decode.rs
//!
//! Header decoding utilities.
//!
//! Design notes:
//! - Deserializes a fixed 512-byte buffer into a `FrequencyHeader`.
//! - Field order must match `encode.rs` exactly.
//! - Bytes past the header are ignored; the caller owns the payload.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{COUNT_WIDTH, HEADER_LEN, SYMBOL_COUNT};
use crate::frequency::FrequencyTable;
use crate::headers::types::{FrequencyHeader, HeaderError};

/// Deserialize a 512-byte little-endian header into `FrequencyHeader`.
///
/// The returned `total_symbols` is the sum of all counts and serves as the
/// decoder's termination counter.
pub fn decode_header_le(buf: &[u8]) -> Result<FrequencyHeader, HeaderError> {
    if buf.len() < HEADER_LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: HEADER_LEN });
    }

    let mut counts = [0u64; SYMBOL_COUNT];
    for (count, field) in counts.iter_mut().zip(buf[..HEADER_LEN].chunks_exact(COUNT_WIDTH)) {
        *count = u64::from(LittleEndian::read_u16(field));
    }

    Ok(FrequencyHeader::new(FrequencyTable::from_counts(counts)))
}
