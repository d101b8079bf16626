//! Logging setup.
//!
//! The terminal is the display, so logs go to a file only. `RUST_LOG`
//! overrides the default `info` filter.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize file logging at `path`.
///
/// Returns a `WorkerGuard` that must be held for the application lifetime so
/// buffered lines are flushed on shutdown. Returns `None` (and logs nothing)
/// if the file cannot be set up.
pub fn init(path: &Path) -> Option<WorkerGuard> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path.file_name()?;

    if let Err(e) = std::fs::create_dir_all(dir) {
        // Can't use tracing yet, and the terminal isn't ours yet either.
        eprintln!("Failed to create log directory {}: {e}", dir.display());
        return None;
    }

    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {}: {e}", path.display());
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(filter)
        .init();

    tracing::info!(log_file = %path.display(), "logging initialized");
    Some(guard)
}
