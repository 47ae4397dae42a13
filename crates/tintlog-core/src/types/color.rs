//! Color value type and its console rendering

use std::fmt;
use std::str::FromStr;

use colored::Colorize;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LogError, LogResult};

/// 24-bit RGB color applied to console lines
///
/// Serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default color for info lines
    pub const LIGHT_BLUE: Color = Color::rgb(90, 200, 250);
    /// Default color for warning lines
    pub const ORANGE: Color = Color::rgb(255, 149, 0);
    /// Default color for error lines
    pub const RED: Color = Color::rgb(255, 59, 48);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`
    pub fn from_hex(hex: &str) -> LogResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LogError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| LogError::InvalidColor(hex.to_string()))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Wrap `text` in this color's foreground escape codes
    ///
    /// Goes through `colored`, so `NO_COLOR`, `CLICOLOR_FORCE` and
    /// `colored::control::set_override` are honoured.
    pub fn paint(&self, text: &str) -> String {
        text.truecolor(self.r, self.g, self.b).to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = LogError;

    fn from_str(s: &str) -> LogResult<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}
