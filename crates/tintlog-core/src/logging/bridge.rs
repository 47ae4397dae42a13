//! Bridge from the `log` facade
//!
//! Libraries that log through `log::info!` and friends end up in the same
//! sinks, subject to the same level and filter table.

use log::{Level, LevelFilter, Metadata, Record};

use super::logger::Logger;
use crate::error::LogResult;
use crate::types::LogType;

/// `log::Log` implementation forwarding to a [`Logger`]
pub struct LogBridge {
    logger: &'static Logger,
}

impl LogBridge {
    pub fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }
}

/// Map a facade level onto a log type
pub fn log_type_for(level: Level) -> LogType {
    match level {
        Level::Error => LogType::Error,
        Level::Warn => LogType::Warning,
        Level::Info => LogType::Info,
        Level::Debug | Level::Trace => LogType::Verbose,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.logger.is_enabled(log_type_for(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.logger.log(
                log_type_for(record.level()),
                format_args!("{}: {}", record.target(), record.args()),
            );
        }
    }

    fn flush(&self) {}
}

/// Route the `log` facade into the shared logger
///
/// Fails if another `log` implementation is already installed.
pub fn init() -> LogResult<()> {
    init_with(Logger::shared())
}

/// Route the `log` facade into `logger`
pub fn init_with(logger: &'static Logger) -> LogResult<()> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    // Filtering happens in the logger's own table
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggerConfig;
    use crate::logging::MemorySink;
    use crate::types::LogLevel;
    use log::Log;
    use std::sync::Arc;

    #[test]
    fn test_level_mapping() {
        assert_eq!(log_type_for(Level::Error), LogType::Error);
        assert_eq!(log_type_for(Level::Warn), LogType::Warning);
        assert_eq!(log_type_for(Level::Info), LogType::Info);
        assert_eq!(log_type_for(Level::Debug), LogType::Verbose);
        assert_eq!(log_type_for(Level::Trace), LogType::Verbose);
    }

    #[test]
    fn test_bridge_forwards_records() {
        let dir = tempfile::TempDir::new().unwrap();
        let sink = Arc::new(MemorySink::new());
        let logger: &'static Logger = Box::leak(Box::new(
            Logger::builder()
                .config(LoggerConfig::default().with_color_enabled(false))
                .sink(sink.clone())
                .log_dir(dir.path())
                .build(),
        ));
        let bridge = LogBridge::new(logger);

        bridge.log(
            &Record::builder()
                .level(Level::Warn)
                .target("disk")
                .args(format_args!("at {}%", 90))
                .build(),
        );
        bridge.log(
            &Record::builder()
                .level(Level::Debug)
                .target("disk")
                .args(format_args!("tick"))
                .build(),
        );
        assert!(!bridge.enabled(&Metadata::builder().level(Level::Trace).build()));

        logger.set_level(LogLevel::ALL);
        assert!(bridge.enabled(&Metadata::builder().level(Level::Trace).build()));

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[WARN] disk: at 90%"));
    }
}
