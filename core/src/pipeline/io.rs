//! pipeline/io.rs
//! Normalized input/output and header block I/O.

use std::fs::File;
use std::io::{Cursor, Read, Seek, Write};
use std::path::PathBuf;

use crate::bitio::{ByteSource, InputStream, OutputStream};
use crate::constants::HEADER_LEN;
use crate::frequency::FrequencyTable;
use crate::headers::{decode_header_le, encode_header_le, FrequencyHeader};
use crate::types::StreamError;

/// Object-safe `Read + Seek`.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn ReadSeek>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write>),
    File(PathBuf),
}

/// Normalize input source into a boxed seekable reader.
pub fn open_input(src: InputSource) -> Result<Box<dyn ReadSeek>, StreamError> {
    let reader: Box<dyn ReadSeek> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => Box::new(File::open(p)?),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer. Files are created or truncated.
pub fn open_output(sink: OutputSink) -> Result<Box<dyn Write>, StreamError> {
    let writer: Box<dyn Write> = match sink {
        OutputSink::Writer(w) => w,
        OutputSink::File(p) => Box::new(File::create(p)?),
    };
    Ok(writer)
}

// ================= Header =================

pub fn write_header<W: Write>(
    out: &mut OutputStream<W>,
    table: &FrequencyTable,
) -> Result<(), StreamError> {
    let buf = encode_header_le(table)?;
    out.write_bytes(&buf)?;
    Ok(())
}

/// Read and decode the header block. The input must hold at least
/// `HEADER_LEN` bytes.
pub fn read_header<R: Read + Seek>(input: &mut InputStream<R>) -> Result<FrequencyHeader, StreamError> {
    let have = input.size();
    if have < HEADER_LEN as u64 {
        return Err(StreamError::TruncatedHeader { have, need: HEADER_LEN as u64 });
    }
    let mut buf = [0u8; HEADER_LEN];
    input.read_exact_bytes(&mut buf)?;
    Ok(decode_header_le(&buf)?)
}
