//! pipeline/compress.rs
//! Input -> frequency header + Huffman payload.

use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::bitio::{BitSink, ByteSource, InputStream, OutputStream};
use crate::config::PipelineConfig;
use crate::constants::HEADER_LEN;
use crate::frequency::FrequencyTable;
use crate::huffman::HuffmanTree;
use crate::pipeline::io::{open_input, open_output, write_header, InputSource, OutputSink};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::StreamError;

/// Compress everything from the reader's current position to its end.
///
/// Layout written: 512-byte frequency header, then one code per input byte,
/// MSB-first, zero-padded to a byte boundary. Empty input writes nothing.
pub fn compress_stream<R, W>(
    reader: R,
    writer: W,
    config: &PipelineConfig,
) -> Result<TelemetrySnapshot, StreamError>
where
    R: Read + Seek,
    W: Write,
{
    let mut counters = TelemetryCounters::default();
    let mut timer = TelemetryTimer::new();

    let mut input = InputStream::with_capacity(config.io_buffer_size, reader)?;
    let mut output = OutputStream::with_capacity(config.io_buffer_size, writer);
    counters.bytes_input = input.size();

    if input.size() == 0 {
        debug!("empty input, writing empty output");
        output.flush()?;
        timer.finish();
        return Ok(TelemetrySnapshot::from(&counters, &timer));
    }

    // ---- Pass 1: frequencies ----
    let table = timer.time(Stage::Scan, || FrequencyTable::from_source(&mut input))?;
    debug!(bytes = table.total(), distinct = table.distinct(), "frequency scan complete");

    let tree = timer.time(Stage::Build, || HuffmanTree::build(&table));
    let lengths = tree.code_lengths();
    debug!(nodes = tree.len(), degenerate = tree.is_degenerate(), "tree built");

    // Rejects counts that do not fit the header before any byte is written.
    timer.time(Stage::Header, || write_header(&mut output, &table))?;
    counters.add_header(HEADER_LEN, table.distinct());

    // ---- Pass 2: encode in original order ----
    timer.time(Stage::Encode, || -> Result<(), StreamError> {
        let size = input.size();
        let mut encoded = 0u64;
        while input.good() && encoded < size {
            let symbol = input.read_byte()?;
            tree.encode(symbol, &mut output)?;
            counters.add_symbol(lengths[symbol as usize]);
            encoded += 1;
        }
        Ok(())
    })?;

    timer.time(Stage::Flush, || output.flush())?;
    counters.bytes_output = output.bytes_written();
    timer.finish();

    let snapshot = TelemetrySnapshot::from(&counters, &timer);
    info!(
        input = snapshot.bytes_input,
        output = snapshot.bytes_output,
        ratio = snapshot.compression_ratio,
        "compressed"
    );
    Ok(snapshot)
}

/// Compress the file at `input` into a new file at `output`.
///
/// The input is opened first, so a missing input never creates the output.
pub fn compress_file(
    input: &Path,
    output: &Path,
    config: &PipelineConfig,
) -> Result<TelemetrySnapshot, StreamError> {
    let reader = open_input(InputSource::File(input.to_path_buf()))?;
    let writer = open_output(OutputSink::File(output.to_path_buf()))?;
    debug!(input = %input.display(), output = %output.display(), "compress file");
    compress_stream(reader, writer, config)
}

/// In-memory convenience over `compress_stream`.
pub fn compress_bytes(data: &[u8]) -> Result<(Vec<u8>, TelemetrySnapshot), StreamError> {
    let mut out = Vec::new();
    let snapshot = compress_stream(Cursor::new(data), &mut out, &PipelineConfig::default())?;
    Ok((out, snapshot))
}
