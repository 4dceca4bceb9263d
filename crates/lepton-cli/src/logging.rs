use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::{
    Layer,
    filter::{LevelFilter, Targets},
    fmt,
    prelude::*,
    registry::LookupSpan,
};

/// Target prefix of every event emitted by the core library, including the per-particle
/// copy, move and destroy events.
const CORE_TARGET: &str = "leptons";

/// Console level: `-q` keeps errors only, each `-v` steps WARN → INFO → DEBUG → TRACE.
fn console_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// What the log file records. The CLI's own events are kept from DEBUG up whatever the
/// console shows, and `-q` does not apply. Core events follow the console verbosity, so the
/// lifecycle traces of every particle only land in the file at `-vvv`.
fn file_targets(verbosity: u8) -> Targets {
    let core_level = console_level(verbosity, false);
    Targets::new()
        .with_default(core_level.max(LevelFilter::DEBUG))
        .with_target(CORE_TARGET, core_level)
}

fn file_layer<S>(file: File, verbosity: u8) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(file_targets(verbosity))
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(console_level(verbosity, quiet));

    let file_layer = match log_file {
        Some(path) => Some(file_layer(File::create(&path)?, verbosity)),
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}
