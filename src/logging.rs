//! File logging. The terminal belongs to the UI, so nothing goes to stdout.
//!
//! Initialization happens at most once per process and never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "todolist";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const SUPPORTED_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

static LOGGER: OnceCell<(PathBuf, LoggerHandle)> = OnceCell::new();

/// Starts the rolling file logger in `log_dir`.
///
/// # Errors
/// - `level` is not one of error/warn/info/debug/trace.
/// - Logging is already running in a different directory.
/// - The directory cannot be created or the backend fails to start.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    let level = normalize_level(level)?;

    if let Some((dir, _)) = LOGGER.get() {
        if dir == log_dir {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            dir.display(),
            log_dir.display()
        ));
    }

    let (dir, _) = LOGGER.get_or_try_init(|| -> Result<(PathBuf, LoggerHandle), String> {
        std::fs::create_dir_all(log_dir).map_err(|err| {
            format!(
                "failed to create log directory `{}`: {err}",
                log_dir.display()
            )
        })?;

        let handle = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
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
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=app_start module=logging status=ok version={} level={} log_dir={}",
            env!("CARGO_PKG_VERSION"),
            level,
            log_dir.display()
        );
        Ok((log_dir.to_path_buf(), handle))
    })?;

    if dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`",
            dir.display()
        ));
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    let lowered = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .find(|supported| **supported == lowered)
        .copied()
        .ok_or_else(|| format!("unsupported log level `{level}`"))
}
