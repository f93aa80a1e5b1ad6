//! telemetry/snapshot.rs
//!
//! Immutable per-run telemetry.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

/// Core telemetry snapshot.
/// Captures counters, ratios, throughput, stage timings, and elapsed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub bytes_input: u64,
    pub bytes_output: u64,
    pub bytes_header: u64,
    pub payload_bits: u64,
    pub symbols: u64,
    pub distinct_symbols: u64,
    /// `bytes_output / bytes_input`; 0 for empty input.
    pub compression_ratio: f64,
    /// Payload bits per symbol; 0 when no symbols were transcoded.
    pub mean_code_length: f64,
    pub throughput_input_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let compression_ratio = if counters.bytes_input > 0 {
            counters.bytes_output as f64 / counters.bytes_input as f64
        } else {
            0.0
        };

        let mean_code_length = if counters.symbols > 0 {
            counters.payload_bits as f64 / counters.symbols as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_input as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            bytes_input: counters.bytes_input,
            bytes_output: counters.bytes_output,
            bytes_header: counters.bytes_header,
            payload_bits: counters.payload_bits,
            symbols: counters.symbols,
            distinct_symbols: counters.distinct_symbols,
            compression_ratio,
            mean_code_length,
            throughput_input_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal consistency:
    /// - payload bits fit in the bytes written after the header
    /// - stage time never exceeds wall time
    pub fn sanity_check(&self) -> bool {
        let payload_bytes = self.payload_bits.div_ceil(8);
        let payload_side = self.bytes_input.max(self.bytes_output);
        payload_side >= self.bytes_header + payload_bytes
            && self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
