//! Logger component and its console sinks

mod traits;
mod noop;
mod console;
mod memory;
pub mod file_logger;
pub mod logger;
pub mod bridge;

pub use traits::{ConsoleSink, SharedSink};
pub use noop::NoOpSink;
pub use console::StdoutSink;
pub use memory::MemorySink;
pub use file_logger::LogFile;

// Re-export the shared-logger functions for convenience
pub use logger::{
    Logger, LoggerBuilder,
    set_level, set_color, set_color_enabled, enable_write_log_to_file,
    log, current_log_path, clear_log, debug_print,
};
