//! pipeline/decompress.rs
//! Frequency header + Huffman payload -> original bytes.

use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::bitio::{BitIoError, BitSink, ByteSource, InputStream, OutputStream};
use crate::config::PipelineConfig;
use crate::huffman::{HuffmanError, HuffmanTree};
use crate::pipeline::io::{open_input, open_output, read_header, InputSource, OutputSink};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::StreamError;

/// Decompress everything from the reader's current position to its end.
///
/// Exactly `total_symbols` codes are decoded, where the total is the sum of
/// the header counts. Input shorter than the header is `TruncatedHeader`;
/// a payload that runs dry first is `TruncatedPayload`.
pub fn decompress_stream<R, W>(
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

    let header = timer.time(Stage::Header, || read_header(&mut input))?;
    let expected = header.total_symbols;
    counters.add_header(input.position() as usize, header.table.distinct());
    debug!(total_symbols = expected, distinct = header.table.distinct(), "header decoded");

    if expected == 0 {
        warn!("header declares zero symbols; output is empty");
    }

    let tree = timer.time(Stage::Build, || HuffmanTree::build(&header.table));
    let lengths = tree.code_lengths();

    timer.time(Stage::Decode, || -> Result<(), StreamError> {
        for decoded in 0..expected {
            let symbol = tree.decode(&mut input).map_err(|e| match e {
                HuffmanError::BitIo(BitIoError::Exhausted) => {
                    StreamError::TruncatedPayload { decoded, expected }
                }
                other => other.into(),
            })?;
            output.write_bytes(&[symbol])?;
            counters.add_symbol(lengths[symbol as usize]);
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
        symbols = snapshot.symbols,
        "decompressed"
    );
    Ok(snapshot)
}

/// Decompress the file at `input` into a new file at `output`.
pub fn decompress_file(
    input: &Path,
    output: &Path,
    config: &PipelineConfig,
) -> Result<TelemetrySnapshot, StreamError> {
    let reader = open_input(InputSource::File(input.to_path_buf()))?;
    let writer = open_output(OutputSink::File(output.to_path_buf()))?;
    debug!(input = %input.display(), output = %output.display(), "decompress file");
    decompress_stream(reader, writer, config)
}

/// In-memory convenience over `decompress_stream`.
pub fn decompress_bytes(data: &[u8]) -> Result<(Vec<u8>, TelemetrySnapshot), StreamError> {
    let mut out = Vec::new();
    let snapshot = decompress_stream(Cursor::new(data), &mut out, &PipelineConfig::default())?;
    Ok((out, snapshot))
}
