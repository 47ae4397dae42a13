//! Tintlog Core
//!
//! Leveled, optionally colorized console logging with an optional
//! append-only session log file.
//!
//! A process-wide logger is created on first use. Configure it with the free
//! functions and emit with the `log_*!` macros:
//!
//! ```no_run
//! use tintlog_core::{log_warn, log_verbose, logging, LogLevel};
//!
//! logging::set_level(LogLevel::WARNING);
//! logging::enable_write_log_to_file(true);
//!
//! log_warn!("disk at {}%", 90);   // printed in orange, appended to the file
//! log_verbose!("tick");           // filtered out
//!
//! println!("log file: {}", logging::current_log_path().display());
//! ```
//!
//! ## Filtering
//!
//! `LogLevel` is a flag set. `NONE` silences everything, `ALL` lets
//! everything through, and otherwise a [`FilterTable`] decides which log types
//! each flag admits. The default table treats flags as thresholds (`INFO`
//! admits info, warnings and errors); `FilterMode::Exact` admits only the
//! type named by each flag.
//!
//! ## Independent loggers
//!
//! ```no_run
//! use std::sync::Arc;
//! use tintlog_core::{Logger, LoggerConfig, LogType, MemorySink};
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::builder()
//!     .config(LoggerConfig::default().with_write_to_file(true))
//!     .sink(sink.clone())
//!     .log_dir("/tmp/my-app/logs")
//!     .build();
//!
//! logger.log(LogType::Info, format_args!("ready"));
//! assert_eq!(sink.len(), 1);
//! ```

pub mod error;
pub mod types;
pub mod config;
pub mod logging;

pub use error::{LogError, LogResult};

pub use types::{LogLevel, LogType, FilterMode, FilterTable, Color};

pub use config::LoggerConfig;

pub use logging::{
    Logger, LoggerBuilder,
    ConsoleSink, SharedSink, StdoutSink, NoOpSink, MemorySink,
};
