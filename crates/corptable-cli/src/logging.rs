//! tracing subscriber setup.
//!
//! Console commands log to stderr so stdout stays parseable. The TUI owns the
//! terminal, so it logs to a file when one is configured and nowhere otherwise.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::args::LogLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
    Disabled,
}

const CRATES: [&str; 3] = ["corptable", "corptable_runtime", "corptable_engine"];

pub fn filter_directives(level: LogLevel) -> String {
    CRATES
        .iter()
        .map(|name| format!("{}={}", name, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init(level: LogLevel, sink: LogSink) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match sink {
        LogSink::Disabled => return Ok(()),
        LogSink::Stderr => builder
            .without_time()
            .with_writer(std::io::stderr)
            .try_init(),
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|err| anyhow!("Failed to initialise logging: {}", err))
}
