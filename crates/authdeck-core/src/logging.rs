//! File-based tracing setup.
//!
//! The TUI owns the terminal's alternate screen, so log output must never hit
//! stdout/stderr. Everything goes to a daily-rotated file under
//! ${AUTHDECK_HOME}/logs, filtered by the AUTHDECK_LOG env var.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Env var controlling the log filter (same syntax as RUST_LOG).
pub const LOG_ENV_VAR: &str = "AUTHDECK_LOG";

/// Installs the global tracing subscriber writing to the log directory.
///
/// Returns the appender guard; the caller must keep it alive for the lifetime
/// of the process or buffered log lines are dropped on exit.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "authdeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(guard)
}
