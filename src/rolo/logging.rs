//! File logging bootstrap.
//!
//! Keeps rolling diagnostic logs under the notebook directory so persistence
//! hiccups can be inspected after the fact. Initialization happens at most
//! once per process, never panics, and a failure leaves the application
//! fully functional; the `log` macros simply become no-ops.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;
use std::path::Path;

const LOG_FILE_BASENAME: &str = "rolo";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Start the file logger in `log_dir` at the given level.
///
/// Subsequent calls are no-ops. Returns a human-readable error string when
/// the level is unknown or the backend cannot be started.
pub fn init(log_dir: &Path, level: &str) -> std::result::Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let level = normalize_level(level)?;

    std::fs::create_dir_all(log_dir).map_err(|e| {
        format!(
            "failed to create log directory `{}`: {e}",
            log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|e| format!("invalid log level `{level}`: {e}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|e| format!("failed to start logger: {e}"))?;

    // The handle flushes on drop; keep it alive for the process lifetime.
    let _ = LOGGER.set(handle);
    Ok(())
}

fn normalize_level(level: &str) -> std::result::Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}
