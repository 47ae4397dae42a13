//! Standard output sink

use std::io::Write;

use super::traits::ConsoleSink;

/// A sink that writes lines to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for StdoutSink {
    fn write_line(&self, line: &str) {
        // A closed stdout must not take the caller down
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
        let _ = stdout.flush();
    }
}
