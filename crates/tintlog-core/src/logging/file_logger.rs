//! Append-only session log file
//!
//! Each process writes to one file named after the time the path was first
//! needed and the process id, e.g.
//! `~/.local/share/tintlog/logs/tintlog-20261017-093012-4242.log`.
//! Lines are appended with a single write so concurrent writers never tear a
//! line.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::LogResult;

/// Directory session log files go to when none is configured
///
/// Uses the platform data directory, or the temp dir when there is none.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tintlog")
        .join("logs")
}

/// File name for a session started at `started` by process `pid`
pub fn session_file_name(started: DateTime<Local>, pid: u32) -> String {
    format!("tintlog-{}-{}.log", started.format("%Y%m%d-%H%M%S"), pid)
}

/// Lazily opened append handle on a log file
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    file: Option<File>,
}

impl LogFile {
    /// Nothing touches the disk until the first append
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a handle is currently open
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn open(path: &Path) -> LogResult<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(file)
    }

    /// Append `line` plus a newline
    ///
    /// On failure the handle is dropped so the next append reopens the file.
    pub fn append(&mut self, line: &str) -> LogResult<()> {
        if self.file.is_none() {
            self.file = Some(Self::open(&self.path)?);
        }
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let result = file.write_all(buf.as_bytes()).and_then(|()| file.flush());
        if let Err(e) = result {
            self.file = None;
            return Err(e.into());
        }
        Ok(())
    }

    /// Truncate the file to zero length
    pub fn clear(&mut self) -> LogResult<()> {
        self.file = None;
        if self.path.exists() {
            File::create(&self.path)?;
        }
        Ok(())
    }

    /// Close the handle, keeping the file on disk
    pub fn close(&mut self) {
        self.file = None;
    }
}
