//! Console sink trait definition

use std::sync::Arc;

/// Destination for formatted console lines
///
/// Implementations:
/// - `StdoutSink`: Writes to standard output
/// - `MemorySink`: Captures lines for tests
/// - `NoOpSink`: Discards everything
///
/// A line never carries its trailing newline; sinks add their own.
///
/// `write_line` runs while the logger holds its lock. A sink must not log
/// through the same `Logger`, or the call deadlocks.
pub trait ConsoleSink: Send + Sync {
    /// Write one line
    fn write_line(&self, line: &str);

    /// Whether the sink accepts color escape codes
    ///
    /// Sinks returning `false` always receive plain text.
    fn supports_color(&self) -> bool {
        true
    }
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn ConsoleSink>;
