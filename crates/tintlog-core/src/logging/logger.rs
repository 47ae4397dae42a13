//! The logger: filtering, formatting and dispatch to the sinks
//!
//! A `Logger` owns one lock guarding its config and its log file handle.
//! Every emission formats the line outside the lock, then writes the console
//! line and the file line while holding it, so lines from concurrent callers
//! never interleave on either sink.
//!
//! Most programs use the process-wide instance through the free functions in
//! this module and the `log_*!` macros.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::console::StdoutSink;
use super::file_logger::{default_log_dir, session_file_name, LogFile};
use super::traits::SharedSink;
use crate::config::LoggerConfig;
use crate::types::{Color, FilterMode, FilterTable, LogLevel, LogType};

/// Mutable state behind the logger's lock
struct LoggerState {
    config: LoggerConfig,
    filter: FilterTable,
    file: Option<LogFile>,
}

/// Leveled console logger with an optional session log file
pub struct Logger {
    state: Mutex<LoggerState>,
    sink: SharedSink,
    log_dir: PathBuf,
    log_path: OnceLock<PathBuf>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.state.lock().config)
            .field("log_dir", &self.log_dir)
            .field("log_path", &self.log_path.get())
            .finish()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Process-wide logger instance
static SHARED: Lazy<Logger> = Lazy::new(Logger::default);

impl Logger {
    /// Logger writing to stdout with the given config
    pub fn new(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// The process-wide logger, created with defaults on first use
    pub fn shared() -> &'static Logger {
        &SHARED
    }

    /// Replace the level
    pub fn set_level(&self, level: LogLevel) {
        self.state.lock().config.level = level;
    }

    /// Register the console color for a log type
    pub fn set_color(&self, color: Color, log_type: LogType) {
        self.state.lock().config.colors.insert(log_type, color);
    }

    /// Print a log type without color from now on
    pub fn clear_color(&self, log_type: LogType) {
        self.state.lock().config.colors.remove(&log_type);
    }

    /// Toggle console colors
    pub fn set_color_enabled(&self, enabled: bool) {
        self.state.lock().config.color_enabled = enabled;
    }

    /// Toggle appending emitted lines to the session log file
    ///
    /// Lines emitted while disabled are not written later.
    pub fn enable_write_log_to_file(&self, enabled: bool) {
        let mut state = self.state.lock();
        state.config.write_to_file = enabled;
        if !enabled {
            if let Some(file) = state.file.as_mut() {
                file.close();
            }
        }
    }

    /// Switch to one of the built-in filter tables
    pub fn set_filter_mode(&self, mode: FilterMode) {
        let mut state = self.state.lock();
        state.config.filter = mode;
        state.filter = FilterTable::for_mode(mode);
    }

    /// Install a custom filter table
    ///
    /// Stays in effect until the next `set_filter_mode`, `apply_config` or
    /// `reset`.
    pub fn set_filter_table(&self, table: FilterTable) {
        self.state.lock().filter = table;
    }

    /// Snapshot of the current config
    pub fn config(&self) -> LoggerConfig {
        self.state.lock().config.clone()
    }

    /// Replace the whole config at once
    pub fn apply_config(&self, config: LoggerConfig) {
        let mut state = self.state.lock();
        state.filter = FilterTable::for_mode(config.filter);
        if !config.write_to_file {
            if let Some(file) = state.file.as_mut() {
                file.close();
            }
        }
        state.config = config;
    }

    /// Back to the default config
    ///
    /// The session log path is kept.
    pub fn reset(&self) {
        self.apply_config(LoggerConfig::default());
    }

    /// Whether a message of `log_type` would be emitted right now
    pub fn is_enabled(&self, log_type: LogType) -> bool {
        let state = self.state.lock();
        state.filter.allows(state.config.level, log_type)
    }

    /// Path of this logger's session log file
    ///
    /// Computed on first call and fixed for the lifetime of the logger.
    pub fn current_log_path(&self) -> &Path {
        self.log_path.get_or_init(|| {
            self.log_dir
                .join(session_file_name(Local::now(), std::process::id()))
        })
    }

    /// Emit one message
    ///
    /// Never fails: a log file that can't be written gets a notice on stderr
    /// and the line is dropped from the file only.
    pub fn log(&self, log_type: LogType, args: fmt::Arguments<'_>) {
        if !self.is_enabled(log_type) {
            return;
        }

        // Formatting may run user Display impls that log themselves
        let line = format_line(Local::now(), log_type, args);

        // Re-check under the lock so level, colors and file flag come from one snapshot
        let mut state = self.state.lock();
        if !state.filter.allows(state.config.level, log_type) {
            return;
        }
        let color = if state.config.color_enabled && self.sink.supports_color() {
            state.config.color_for(log_type)
        } else {
            None
        };
        match color {
            Some(color) => self.sink.write_line(&color.paint(&line)),
            None => self.sink.write_line(&line),
        }

        if state.config.write_to_file {
            let file = state
                .file
                .get_or_insert_with(|| LogFile::new(self.current_log_path()));
            if let Err(e) = file.append(&line) {
                eprintln!(
                    "tintlog: failed to write log file {}: {}",
                    file.path().display(),
                    e
                );
            }
        }
    }

    /// Emit an already rendered message
    pub fn log_str(&self, log_type: LogType, message: &str) {
        self.log(log_type, format_args!("{}", message));
    }

    /// Write `DebugLog: <message>` to the console sink, bypassing filters
    #[doc(hidden)]
    pub fn debug_print(&self, args: fmt::Arguments<'_>) {
        self.sink.write_line(&format!("DebugLog: {}", args));
    }

    /// Truncate the session log file
    ///
    /// Errors are reported on stderr only.
    pub fn clear_log(&self) {
        let mut state = self.state.lock();
        let file = state
            .file
            .get_or_insert_with(|| LogFile::new(self.current_log_path()));
        if let Err(e) = file.clear() {
            eprintln!(
                "tintlog: failed to clear log file {}: {}",
                file.path().display(),
                e
            );
        }
    }
}

/// Render `<timestamp> [TAG] <message>`
pub fn format_line(now: DateTime<Local>, log_type: LogType, args: fmt::Arguments<'_>) -> String {
    format!(
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        log_type.tag(),
        args
    )
}

/// Builder for [`Logger`]
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<SharedSink>,
    log_dir: Option<PathBuf>,
    filter: Option<FilterTable>,
}

impl LoggerBuilder {
    /// Starting config (defaults otherwise)
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Console sink (stdout otherwise)
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Directory for the session log file (platform data dir otherwise)
    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Custom filter table (the config's filter mode otherwise)
    pub fn filter_table(mut self, table: FilterTable) -> Self {
        self.filter = Some(table);
        self
    }

    pub fn build(self) -> Logger {
        let filter = self
            .filter
            .unwrap_or_else(|| FilterTable::for_mode(self.config.filter));
        Logger {
            state: Mutex::new(LoggerState {
                config: self.config,
                filter,
                file: None,
            }),
            sink: self.sink.unwrap_or_else(|| Arc::new(StdoutSink::new())),
            log_dir: self.log_dir.unwrap_or_else(default_log_dir),
            log_path: OnceLock::new(),
        }
    }
}

/// Set the level of the shared logger
pub fn set_level(level: LogLevel) {
    Logger::shared().set_level(level);
}

/// Register a color on the shared logger
pub fn set_color(color: Color, log_type: LogType) {
    Logger::shared().set_color(color, log_type);
}

/// Toggle colors on the shared logger
pub fn set_color_enabled(enabled: bool) {
    Logger::shared().set_color_enabled(enabled);
}

/// Toggle the log file of the shared logger
pub fn enable_write_log_to_file(enabled: bool) {
    Logger::shared().enable_write_log_to_file(enabled);
}

/// Emit a message on the shared logger
pub fn log(log_type: LogType, args: fmt::Arguments<'_>) {
    Logger::shared().log(log_type, args);
}

/// Session log path of the shared logger
pub fn current_log_path() -> &'static Path {
    Logger::shared().current_log_path()
}

/// Truncate the shared logger's session log file
pub fn clear_log() {
    Logger::shared().clear_log();
}

#[doc(hidden)]
pub fn debug_print(args: fmt::Arguments<'_>) {
    Logger::shared().debug_print(args);
}

/// Convenience macros for logging on the shared logger
#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::types::LogType::Verbose, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::types::LogType::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::types::LogType::Warning, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::types::LogType::Error, format_args!($($arg)*))
    };
}

/// Print `DebugLog: <message>` in debug builds of the calling crate
///
/// Skips level filtering and the log file.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::logging::debug_print(format_args!($($arg)*));
        }
    };
}
