//! Log levels, log types and the emission filter

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LogError, LogResult};

bitflags! {
    /// Filter setting controlling which log types reach the sinks
    ///
    /// The flags form a set rather than an ordered scale, so `INFO | ERROR`
    /// is a legal setting. How each flag maps onto [`LogType`]s is decided by
    /// a [`FilterTable`], never by comparing the raw bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LogLevel: u8 {
        /// Emit every log type
        const ALL     = 1;
        /// Emit info messages
        const INFO    = 1 << 1;
        /// Emit warning messages
        const WARNING = 1 << 2;
        /// Emit error messages
        const ERROR   = 1 << 3;
        /// Emit nothing; wins over every other flag
        const NONE    = 1 << 4;
    }
}

const FLAG_NAMES: [(LogLevel, &str); 5] = [
    (LogLevel::ALL, "all"),
    (LogLevel::INFO, "info"),
    (LogLevel::WARNING, "warning"),
    (LogLevel::ERROR, "error"),
    (LogLevel::NONE, "none"),
];

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::INFO
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // An empty set lets nothing through, same as NONE
        if self.is_empty() {
            return f.write_str("none");
        }

        let mut first = true;
        for (flag, name) in FLAG_NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    /// Parse `"info"`, `"warning|error"`, `"warn, error"` and so on
    fn from_str(s: &str) -> LogResult<Self> {
        let mut level = LogLevel::empty();
        for part in s.split(['|', ',']) {
            let part = part.trim().to_lowercase();
            let flag = match part.as_str() {
                "all" => LogLevel::ALL,
                "info" => LogLevel::INFO,
                "warn" | "warning" => LogLevel::WARNING,
                "error" => LogLevel::ERROR,
                "none" | "off" => LogLevel::NONE,
                _ => return Err(LogError::InvalidLevel(s.to_string())),
            };
            level |= flag;
        }
        Ok(level)
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Classification of a single log call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    Verbose,
    Info,
    Warning,
    Error,
}

impl LogType {
    /// Every log type, in ascending severity
    pub const ALL: [LogType; 4] = [
        LogType::Verbose,
        LogType::Info,
        LogType::Warning,
        LogType::Error,
    ];

    /// Bracketed tag written in front of each line
    pub fn tag(&self) -> &'static str {
        match self {
            LogType::Verbose => "[VERBOSE]",
            LogType::Info => "[INFO]",
            LogType::Warning => "[WARN]",
            LogType::Error => "[ERROR]",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogType::Verbose => write!(f, "verbose"),
            LogType::Info => write!(f, "info"),
            LogType::Warning => write!(f, "warning"),
            LogType::Error => write!(f, "error"),
        }
    }
}

/// Which built-in [`FilterTable`] a logger starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// A flag lets through its own type and every more severe one
    #[default]
    Threshold,
    /// A flag lets through exactly its own type
    Exact,
}

/// Decision table mapping (level, log type) to emit or suppress
///
/// For each log type the table stores the set of level flags that let it
/// through. `NONE` and `ALL` are handled before the table is consulted:
///
/// | level contains | result                                   |
/// |----------------|------------------------------------------|
/// | `NONE`         | suppress                                 |
/// | `ALL`          | emit                                     |
/// | otherwise      | emit if any flag is listed for the type  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTable {
    permitted_by: [LogLevel; 4],
}

impl Default for FilterTable {
    fn default() -> Self {
        Self::threshold()
    }
}

impl FilterTable {
    /// INFO admits info and above, WARNING admits warning and above,
    /// ERROR admits errors. Verbose only passes through `ALL`.
    pub const fn threshold() -> Self {
        Self {
            permitted_by: [
                LogLevel::empty(),
                LogLevel::INFO,
                LogLevel::INFO.union(LogLevel::WARNING),
                LogLevel::INFO.union(LogLevel::WARNING).union(LogLevel::ERROR),
            ],
        }
    }

    /// Each flag admits only the log type of the same name
    pub const fn exact() -> Self {
        Self {
            permitted_by: [
                LogLevel::empty(),
                LogLevel::INFO,
                LogLevel::WARNING,
                LogLevel::ERROR,
            ],
        }
    }

    /// Table for a built-in mode
    pub const fn for_mode(mode: FilterMode) -> Self {
        match mode {
            FilterMode::Threshold => Self::threshold(),
            FilterMode::Exact => Self::exact(),
        }
    }

    /// Replace the flags that admit `log_type`
    pub fn with_rule(mut self, log_type: LogType, permitted_by: LogLevel) -> Self {
        self.permitted_by[log_type.index()] = permitted_by;
        self
    }

    /// Flags that admit `log_type` when neither `ALL` nor `NONE` is set
    pub fn permitted_by(&self, log_type: LogType) -> LogLevel {
        self.permitted_by[log_type.index()]
    }

    /// Whether a message of `log_type` passes under `level`
    pub fn allows(&self, level: LogLevel, log_type: LogType) -> bool {
        if level.contains(LogLevel::NONE) {
            return false;
        }
        if level.contains(LogLevel::ALL) {
            return true;
        }
        level.intersects(self.permitted_by(log_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_suppresses_everything() {
        let table = FilterTable::threshold();
        for log_type in LogType::ALL {
            assert!(!table.allows(LogLevel::NONE, log_type));
            assert!(!table.allows(LogLevel::NONE | LogLevel::ALL, log_type));
        }
    }

    #[test]
    fn test_all_allows_everything() {
        for table in [FilterTable::threshold(), FilterTable::exact()] {
            for log_type in LogType::ALL {
                assert!(table.allows(LogLevel::ALL, log_type));
            }
        }
    }

    #[test]
    fn test_threshold_table() {
        let table = FilterTable::threshold();
        let cases = [
            (LogLevel::INFO, [false, true, true, true]),
            (LogLevel::WARNING, [false, false, true, true]),
            (LogLevel::ERROR, [false, false, false, true]),
        ];
        for (level, expected) in cases {
            for (log_type, want) in LogType::ALL.into_iter().zip(expected) {
                assert_eq!(table.allows(level, log_type), want, "{level} / {log_type}");
            }
        }
    }

    #[test]
    fn test_exact_table() {
        let table = FilterTable::exact();
        assert!(table.allows(LogLevel::WARNING, LogType::Warning));
        assert!(!table.allows(LogLevel::WARNING, LogType::Error));
        assert!(table.allows(LogLevel::INFO | LogLevel::ERROR, LogType::Error));
        assert!(!table.allows(LogLevel::INFO | LogLevel::ERROR, LogType::Warning));
    }

    #[test]
    fn test_empty_level_allows_nothing() {
        let table = FilterTable::threshold();
        for log_type in LogType::ALL {
            assert!(!table.allows(LogLevel::empty(), log_type));
        }
    }

    #[test]
    fn test_custom_rule() {
        let table = FilterTable::threshold().with_rule(LogType::Verbose, LogLevel::INFO);
        assert!(table.allows(LogLevel::INFO, LogType::Verbose));
        assert!(!table.allows(LogLevel::ERROR, LogType::Verbose));
        assert_eq!(table.permitted_by(LogType::Verbose), LogLevel::INFO);
    }

    #[test]
    fn test_level_parse_and_display() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::INFO);
        assert_eq!("Warn".parse::<LogLevel>().unwrap(), LogLevel::WARNING);
        assert_eq!(
            "warning | error".parse::<LogLevel>().unwrap(),
            LogLevel::WARNING | LogLevel::ERROR
        );
        assert!(matches!(
            "loud".parse::<LogLevel>(),
            Err(LogError::InvalidLevel(_))
        ));

        assert_eq!((LogLevel::INFO | LogLevel::ERROR).to_string(), "info|error");
        assert_eq!(LogLevel::empty().to_string(), "none");
        assert_eq!(LogLevel::default(), LogLevel::INFO);
    }

    #[test]
    fn test_type_tags() {
        assert_eq!(LogType::Verbose.tag(), "[VERBOSE]");
        assert_eq!(LogType::Info.tag(), "[INFO]");
        assert_eq!(LogType::Warning.tag(), "[WARN]");
        assert_eq!(LogType::Error.tag(), "[ERROR]");
    }
}
