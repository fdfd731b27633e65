use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Where logs go when no log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFallback {
    /// The terminal is owned by the UI.
    Discard,
    Stderr,
}

/// Install the global subscriber. `RUST_LOG` overrides the configured filter.
pub fn init_tracing(config: &LogConfig, fallback: LogFallback) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let (writer, ansi) = match (&config.file, fallback) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        (None, LogFallback::Stderr) => (BoxMakeWriter::new(io::stderr), true),
        (None, LogFallback::Discard) => (BoxMakeWriter::new(io::sink), false),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
    Ok(())
}
