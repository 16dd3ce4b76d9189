use std::path::Path;

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts rotating file logging under `log_dir`. Log output must never
/// reach the terminal while the TUI owns it, so there is no stderr
/// fallback. The returned handle flushes on drop; keep it alive for the
/// whole run.
pub fn init(log_dir: &Path) -> Result<LoggerHandle> {
    Logger::try_with_str(default_level())
        .context("invalid log level")?
        .log_to_file(FileSpec::default().directory(log_dir).basename("tana"))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()
        .context("failed to start logger")
}

fn default_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}
