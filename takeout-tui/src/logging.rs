//! File-based tracing setup.
//!
//! The terminal is in raw mode while the app runs, so logs go to a daily
//! rolling file instead of stderr. The returned guard must stay alive for
//! the process lifetime or buffered lines are lost.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

pub fn init(log_dir: &Path) -> Result<WorkerGuard, LoggingError> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "takeout-tui.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(non_blocking)
        .try_init()
        .map_err(|error| LoggingError::Init(error.to_string()))?;

    Ok(guard)
}
