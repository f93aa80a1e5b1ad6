//! telemetry/timers.rs
//! Stage timers for compress and decompress runs.
//!
//! Summary: records durations for scan, build, header, encode/decode and
//! flush stages.

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Frequency pass over the input.
    Scan,
    /// Tree construction.
    Build,
    /// Header encode or decode.
    Header,
    /// Payload encoding.
    Encode,
    /// Payload decoding.
    Decode,
    /// Final partial byte and writer flush.
    Flush,
}

impl Stage {
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Scan   => "scan",
            Stage::Build  => "build",
            Stage::Header => "header",
            Stage::Encode => "encode",
            Stage::Decode => "decode",
            Stage::Flush  => "flush",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accumulated wall time per stage, ordered by `Stage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageTimes {
    times: BTreeMap<Stage, Duration>,
}

impl StageTimes {
    /// Charge `dur` to `stage`; repeated charges add up.
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        let slot = self.times.entry(stage).or_default();
        *slot += dur;
    }

    /// Time charged to `stage`, zero if never recorded.
    pub fn get(&self, stage: Stage) -> Duration {
        self.times.get(&stage).copied().unwrap_or_default()
    }

    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1e3
    }

    pub fn total(&self) -> Duration {
        self.times.values().sum()
    }

    /// Recorded, even if the recorded time rounds to zero.
    pub fn has_all(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|stage| self.times.contains_key(stage))
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Stage, Duration> {
        self.times.iter()
    }
}

impl<'a> IntoIterator for &'a StageTimes {
    type Item = (&'a Stage, &'a Duration);
    type IntoIter = btree_map::Iter<'a, Stage, Duration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Wall clock for one run plus its per-stage breakdown.
#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    pub started: Instant,
    pub finished: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self { started: Instant::now(), finished: None, stage_times: StageTimes::default() }
    }

    /// Stop the wall clock. Later calls move the stop point.
    pub fn finish(&mut self) {
        self.finished = Some(Instant::now());
    }

    pub fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }

    /// Run `f` and charge its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = f();
        self.add_stage_time(stage, started.elapsed());
        out
    }

    /// Wall time from construction to `finish`, or to now if still running.
    pub fn elapsed(&self) -> Duration {
        self.finished.unwrap_or_else(Instant::now).duration_since(self.started)
    }
}
