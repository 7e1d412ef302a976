//! File logging for bullseye.
//!
//! stdout belongs to the TUI, so events are written through a non-blocking appender into
//! `<cache>/bullseye/bullseye.log`. The filter comes from `BULLSEYE_LOG` (default `warn`).

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "BULLSEYE_LOG";
const LOG_FILE: &str = "bullseye.log";

/// Directory the log file is written to.
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("bullseye")
}

/// Installs the global subscriber.
///
/// Returns the guard flushing the appender; it must live until the program exits.
/// Any failure leaves the program running without logs.
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = log_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("[bullseye] logging disabled: {e}");
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .ok()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Some(guard)
}
