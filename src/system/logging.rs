//! Logging system initialization.
//!
//! The interface owns the terminal, so log output only ever goes to a file;
//! with no file configured, logging stays disabled.

use tracing_appender::rolling;

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber from configuration.
///
/// Call once during startup, before the terminal is taken over.
///
/// # Returns
/// * `Some(WorkerGuard)` when a log file is configured — must be kept alive
///   for the duration of the program so buffered writes are flushed
/// * `None` when logging is disabled
///
/// # Panics
/// * If creating the log appender fails
/// * If a global subscriber was already installed
pub fn init_logging(config: &LoggingConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty())?;

    let writer: Box<dyn std::io::Write + Send + Sync> = if config.enable_rotation {
        let dir = std::path::Path::new(log_file)
            .parent()
            .unwrap_or(std::path::Path::new("."));
        let filename = std::path::Path::new(log_file)
            .file_name()
            .unwrap_or(std::ffi::OsStr::new("linkdeck.log"));
        let filename_str = filename.to_str().unwrap_or("linkdeck.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename_str.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups as usize)
            .build(dir)
            .expect("Failed to create rolling log appender");
        Box::new(appender)
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .expect("Failed to open log file");
        Box::new(file)
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false);

    if config.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    Some(guard)
}
