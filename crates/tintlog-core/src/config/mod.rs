//! Logger configuration
//!
//! `LoggerConfig` is the full set of knobs a logger carries. It can be built
//! in code, or loaded from a YAML file (user level:
//! `~/.config/tintlog/config.yaml`).

mod file;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Color, FilterMode, LogLevel, LogType};

/// Logger configuration
///
/// A `colors` table read from a file replaces the default table as a whole;
/// types missing from it are printed without color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Which log types are emitted
    pub level: LogLevel,
    /// Whether console lines are colored
    pub color_enabled: bool,
    /// Whether emitted lines are appended to the session log file
    pub write_to_file: bool,
    /// Console color per log type
    pub colors: BTreeMap<LogType, Color>,
    /// Built-in filter table to start from
    pub filter: FilterMode,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::INFO,
            color_enabled: true,
            write_to_file: false,
            colors: default_colors(),
            filter: FilterMode::Threshold,
        }
    }
}

fn default_colors() -> BTreeMap<LogType, Color> {
    BTreeMap::from([
        (LogType::Info, Color::LIGHT_BLUE),
        (LogType::Warning, Color::ORANGE),
        (LogType::Error, Color::RED),
    ])
}

impl LoggerConfig {
    /// Set the level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Register a color for a log type
    pub fn with_color(mut self, log_type: LogType, color: Color) -> Self {
        self.colors.insert(log_type, color);
        self
    }

    /// Enable or disable console colors
    pub fn with_color_enabled(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    /// Enable or disable the log file
    pub fn with_write_to_file(mut self, enabled: bool) -> Self {
        self.write_to_file = enabled;
        self
    }

    /// Set the filter mode
    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// Color registered for `log_type`, if any
    pub fn color_for(&self, log_type: LogType) -> Option<Color> {
        self.colors.get(&log_type).copied()
    }
}
