//! Diagnostics setup
//!
//! Builds the tracing dispatcher for one run. Records are plain text without
//! timestamps and go to the log file when it can be opened, else to stderr.
//! The dispatcher is installed with `tracing::dispatcher::with_default` for
//! the duration of the run rather than as a process-wide global.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Dispatch;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Where diagnostics ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    /// Log file could not be opened; carries the reason
    Stderr(String),
}

/// Default filter directive for a `-v` count
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the diagnostics dispatcher
///
/// `RUST_LOG` overrides the level derived from `verbose`.
pub fn build_dispatch(log_file: &Path, verbose: u8) -> (Dispatch, LogDestination) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let (writer, destination) = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => (
            BoxMakeWriter::new(Mutex::new(file)),
            LogDestination::File(log_file.to_path_buf()),
        ),
        Err(e) => (
            BoxMakeWriter::new(std::io::stderr),
            LogDestination::Stderr(e.to_string()),
        ),
    };

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer),
        )
        .with(filter);

    (Dispatch::new(subscriber), destination)
}
