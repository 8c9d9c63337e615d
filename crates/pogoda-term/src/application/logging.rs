#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;

use std::path;

use anyhow::anyhow;
use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;

use super::cli::Invocation;

/// Routes tracing output to a JSON log file. The terminal belongs to the UI,
/// so nothing is ever written to stdout or stderr. Keep the returned guard
/// alive until exit so buffered lines are flushed.
pub fn init(log_file: &str, log_level: &str) -> Result<WorkerGuard> {
    let level = log_level
        .parse::<LevelFilter>()
        .map_err(|err| return anyhow!("invalid log level '{log_level}': {err}"))?;

    let log_path = path::PathBuf::from(log_file);
    let directory = log_path
        .parent()
        .filter(|e| return !e.as_os_str().is_empty())
        .map(|e| return e.to_path_buf())
        .unwrap_or_else(|| return path::PathBuf::from("."));
    let file_name = log_path
        .file_name()
        .ok_or_else(|| return anyhow!("log file path has no file name: {log_file}"))?;

    std::fs::create_dir_all(&directory)?;
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_writer(writer)
        .try_init()
        .map_err(|err| return anyhow!("failed to install log subscriber: {err}"))?;

    return Ok(guard);
}

/// Installs logging for an invocation. The interactive terminal requires its
/// log file; a one-shot evaluation runs without logs when the file cannot be
/// opened, and printing subcommands never log.
pub fn init_for(
    invocation: &Invocation,
    log_file: &str,
    log_level: &str,
) -> Result<Option<WorkerGuard>> {
    match invocation {
        Invocation::Done => {
            return Ok(None);
        }
        Invocation::Evaluate { .. } => match init(log_file, log_level) {
            Ok(guard) => return Ok(Some(guard)),
            Err(_) => return Ok(None),
        },
        Invocation::Interactive => {
            return Ok(Some(init(log_file, log_level)?));
        }
    }
}
