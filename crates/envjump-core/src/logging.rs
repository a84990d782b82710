//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/envjump/logs/`, never to the
/// terminal the popup is drawn on.
/// Log level is controlled by `ENVJUMP_LOG` environment variable.
///
/// # Examples
/// ```bash
/// ENVJUMP_LOG=debug envjump --command run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "envjump.log");

    // Default to info, allow override via ENVJUMP_LOG
    let env_filter = EnvFilter::try_from_env("ENVJUMP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("envjump=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Logging to {}", log_dir.display());

    Ok(())
}

/// Base data directory shared by logs and the default store document
pub fn data_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("envjump")
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    Ok(data_directory().join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("envjump.log"))
}
