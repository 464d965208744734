//! Logging initialization using the `tracing` ecosystem.
//!
//! Console output by default; when `log.file` is configured, events go to
//! that file through a non-blocking `tracing-appender` writer so request
//! handlers never wait on file I/O.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Non-blocking writer appending to `path`, never rotated.
///
/// The returned guard flushes pending lines when dropped and must be kept
/// alive for as long as logging is needed.
pub fn file_writer(path: &str) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let path = Path::new(path);
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path '{}' has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Returns the file
/// writer guard when logging to a file.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match &config.file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();
            Ok(Some(guard))
        }
        None => {
            let console_layer = fmt::layer().with_target(true).with_thread_ids(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .init();
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("pricedb-{}-{}-{}", name, std::process::id(), nanos));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_file_writer_appends_to_configured_file() {
        let dir = scratch_dir("log");
        let path = dir.join("pricedb.log");

        let (mut writer, guard) = file_writer(path.to_str().unwrap()).unwrap();
        writer.write_all(b"hello from the log\n").unwrap();
        // Dropping the guard flushes the background worker
        drop(writer);
        drop(guard);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "hello from the log\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_writer_rejects_path_without_file_name() {
        assert!(file_writer("/").is_err());
    }
}
