//! File logging.
//!
//! The terminal belongs to the reader, so log lines go to
//! `$LTBR_HOME/ltbr.log`. The level comes from `LTBR_LOG` (default `warn`).

use std::fs;

use ltbr_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LTBR_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Logging is best effort: when the log
/// directory is unusable the program runs without it.
pub fn init() -> Option<WorkerGuard> {
    let dir = paths::ltbr_home().ok()?;
    fs::create_dir_all(&dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&dir, paths::LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
