//! CLI helpers.

use anyhow::{anyhow, Result};
use log::Log;

static STDOUT_LOGGER: StdoutLogger = StdoutLogger;

/// Install the stdout logger. Verbose mode raises the level to debug.
pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    log::set_max_level(level);
    log::set_logger(&STDOUT_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))
}

struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        println!(
            "{file}:{line}: {}: {}",
            record.level(),
            record.args(),
            file = record.file().unwrap_or_default(),
            line = record.line().unwrap_or_default()
        );
    }

    fn flush(&self) {}
}
