//! In-memory sink for tests

use parking_lot::Mutex;

use super::traits::ConsoleSink;

/// A sink that keeps every line it receives
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
    plain: bool,
}

impl MemorySink {
    /// Create a sink that accepts colored lines
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that reports no color support
    pub fn plain() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            plain: true,
        }
    }

    /// Snapshot of the captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drop captured lines
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ConsoleSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }

    fn supports_color(&self) -> bool {
        !self.plain
    }
}
