//! File logging for the TUI.
//!
//! The terminal owns stdout, so every record goes to a rotating file. Note
//! content is never logged; only names and outcomes are.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use std::path::Path;

const LOG_FILE_BASENAME: &str = "librenotes";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// `debug` in debug builds, `info` in release. `RUST_LOG` takes precedence.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    }
    else {
        "info"
    }
}

/// Starts the file logger. The returned handle must be kept alive for the
/// lifetime of the process.
pub fn init(log_dir: &Path) -> Result<LoggerHandle, String> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!("failed to create log directory `{}`: {err}", log_dir.display())
    })?;

    let logger = Logger::try_with_env_or_str(default_log_level())
        .map_err(|err| format!("invalid log specification: {err}"))?
        .log_to_file(FileSpec::default().directory(log_dir).basename(LOG_FILE_BASENAME))
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

    install_panic_hook();
    info!(
        "event=app_start version={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(logger)
}

fn install_panic_hook() {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!("event=panic location={location}");
        previous_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::{default_log_level, init};

    #[test]
    fn level_follows_build_mode() {
        let expected = if cfg!(debug_assertions) { "debug" } else { "info" };
        assert_eq!(default_log_level(), expected);
    }

    #[test]
    fn writes_into_log_dir() {
        let temp = tempfile::tempdir().unwrap();
        let log_dir = temp.path().join("logs");
        let handle = init(&log_dir).expect("logger should start");
        log::info!("event=test");
        handle.flush();

        let names: Vec<String> = std::fs::read_dir(&log_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().any(|name| name.starts_with("librenotes")), "{names:?}");
    }
}
