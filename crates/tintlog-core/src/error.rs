//! Error type shared by the fallible helpers of this crate
//!
//! The emission path itself never returns errors; these surface only from
//! configuration loading, parsing and installing the `log` bridge.

use thiserror::Error;

/// Errors that can occur outside the emission path
#[derive(Error, Debug)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Failed to install log bridge: {0}")]
    Install(#[from] log::SetLoggerError),
}

pub type LogResult<T> = Result<T, LogError>;
