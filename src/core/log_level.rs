//! Log level definitions

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// Levels are ordered from least to most verbose. A logger configured with
/// a given threshold lets through every message whose level is less than or
/// equal to it; a threshold of [`LogLevel::Disable`] lets nothing through.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum LogLevel {
    Disable = 0,
    Error = 1,
    #[serde(alias = "warning")]
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
}

impl LogLevel {
    /// Every level, in ascending order.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Disable,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// Translate a configuration token into a level.
    ///
    /// Matching is case-sensitive. `"warning"` is accepted as an alias of
    /// `"warn"`. Anything unrecognized turns logging off, so callers that need
    /// to detect a typo must compare the result against [`LogLevel::Disable`].
    ///
    /// # Example
    ///
    /// ```
    /// use rust_console_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::from_name("warning"), LogLevel::Warn);
    /// assert_eq!(LogLevel::from_name("Warning"), LogLevel::Disable);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            _ => LogLevel::Disable,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Disable => "disable",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Inverse of [`LogLevel::as_u32`]; `None` for values outside `0..=4`.
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Disable),
            1 => Some(LogLevel::Error),
            2 => Some(LogLevel::Warn),
            3 => Some(LogLevel::Info),
            4 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    /// Whether a message at `level` passes a logger whose threshold is `self`.
    #[inline]
    pub fn permits(self, level: LogLevel) -> bool {
        self > LogLevel::Disable && level > LogLevel::Disable && level <= self
    }

    /// Highlight color used when the sink can render colors.
    pub fn color(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            LogLevel::Disable => None,
            LogLevel::Error => Some(Red),
            LogLevel::Warn => Some(Magenta),
            LogLevel::Info => Some(BrightGreen),
            LogLevel::Debug => Some(Yellow),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::from_name(s))
    }
}
