//! Core value types: levels, log types, the filter table and colors

mod level;
mod color;

pub use level::{LogLevel, LogType, FilterMode, FilterTable};
pub use color::Color;
