//! huffpack-cli
//!
//! Shared plumbing for the `compress` and `decompress` binaries.
//! Both take exactly two positional arguments: input path, output path.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use huffpack_core::config::PipelineConfig;
use huffpack_core::pipeline::{compress_file, decompress_file};
use huffpack_core::telemetry::TelemetrySnapshot;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "huffpack_core=warn,huffpack_cli=info";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(disable_help_flag = true)]
pub struct Args {
    /// File to read
    pub input: PathBuf,

    /// File to create or overwrite
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Compress => "compress",
            Mode::Decompress => "decompress",
        }
    }

    fn about(self) -> &'static str {
        match self {
            Mode::Compress => "Compress a file with static Huffman coding",
            Mode::Decompress => "Restore a file written by `compress`",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse `args` (program name first) for `mode`.
///
/// Any argument count other than two positionals is a usage error.
pub fn try_parse_args<I, T>(mode: Mode, args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = Args::command()
        .name(mode.name())
        .about(mode.about())
        .try_get_matches_from(args)?;
    Args::from_arg_matches(&matches)
}

/// Parse the process arguments, exiting with a usage message on error.
pub fn parse_args(mode: Mode) -> Args {
    try_parse_args(mode, std::env::args_os()).unwrap_or_else(|e| e.exit())
}

/// Install the stderr subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run one compress or decompress over files.
pub fn run(mode: Mode, args: &Args) -> Result<TelemetrySnapshot> {
    let config = PipelineConfig::from_env().context("reading configuration")?;

    let result = match mode {
        Mode::Compress => compress_file(&args.input, &args.output, &config),
        Mode::Decompress => decompress_file(&args.input, &args.output, &config),
    };
    let snapshot = result.with_context(|| {
        format!("{mode} {} -> {}", args.input.display(), args.output.display())
    })?;

    for (stage, dur) in &snapshot.stage_times {
        debug!(%stage, ms = dur.as_secs_f64() * 1e3, "stage time");
    }
    match snapshot.to_json() {
        Ok(json) => debug!(telemetry = %json, "run telemetry"),
        Err(e) => debug!(error = %e, "telemetry not serializable"),
    }
    Ok(snapshot)
}
