//! Severity prefix rendering
//!
//! A [`PrefixTable`] holds every prefix a logger may print, computed once
//! when the table is built. Rendering afterwards is a table lookup: no I/O,
//! no allocation, no failure.

use super::error::Result;
use super::log_level::LogLevel;
use super::preferences::Preferences;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ANSI_RESET: &str = "\x1b[0m";
const LEVEL_COUNT: usize = LogLevel::ALL.len();

/// Wording of the severity prefixes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefixStyle {
    /// Four-letter tags: `[ERRO]`, `[WARN]`, `[INFO]`, `[DBUG]`
    Short,
    /// Full words: `[ERROR]`, `[WARNING]`, `[INFORMATION]`, `[DEBUG]`
    #[default]
    Long,
}

impl PrefixStyle {
    pub fn from_short(use_short_messages: bool) -> Self {
        if use_short_messages {
            PrefixStyle::Short
        } else {
            PrefixStyle::Long
        }
    }

    /// Plain prefix text for `level` in this style
    pub fn text(&self, level: LogLevel) -> &'static str {
        match (level, self) {
            (LogLevel::Disable, _) => "",
            (LogLevel::Error, PrefixStyle::Short) => "[ERRO]",
            (LogLevel::Error, PrefixStyle::Long) => "[ERROR]",
            (LogLevel::Warn, PrefixStyle::Short) => "[WARN]",
            (LogLevel::Warn, PrefixStyle::Long) => "[WARNING]",
            (LogLevel::Info, PrefixStyle::Short) => "[INFO]",
            (LogLevel::Info, PrefixStyle::Long) => "[INFORMATION]",
            (LogLevel::Debug, PrefixStyle::Short) => "[DBUG]",
            (LogLevel::Debug, PrefixStyle::Long) => "[DEBUG]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Prefix {
    plain: &'static str,
    colored: String,
}

impl Prefix {
    fn build(level: LogLevel, style: PrefixStyle) -> Self {
        let plain = style.text(level);
        let colored = match level.color() {
            Some(color) if !plain.is_empty() => {
                format!("\x1b[{}m{}{}", color.to_fg_str(), plain, ANSI_RESET)
            }
            _ => String::new(),
        };
        Self { plain, colored }
    }
}

/// Precomputed prefixes for every level, in one style.
///
/// Build it once at startup and share it (typically behind an `Arc`) with
/// every logger.
///
/// # Example
///
/// ```
/// use rust_console_logger::{LogLevel, PrefixStyle, PrefixTable};
///
/// let table = PrefixTable::new(PrefixStyle::Short);
/// assert_eq!(table.render(LogLevel::Error, false), "[ERRO]");
/// assert_eq!(table.render(LogLevel::Disable, true), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    style: PrefixStyle,
    entries: [Prefix; LEVEL_COUNT],
}

impl PrefixTable {
    pub fn new(style: PrefixStyle) -> Self {
        Self {
            style,
            entries: LogLevel::ALL.map(|level| Prefix::build(level, style)),
        }
    }

    pub fn from_preferences(preferences: &Preferences) -> Self {
        Self::new(preferences.style())
    }

    /// Read the current user's preference file and build the table.
    ///
    /// This is the one fallible step of the logger's lifecycle. A missing or
    /// malformed preference file is an error; hosts are expected to abort
    /// startup on it rather than log with a guessed style.
    pub fn init() -> Result<Self> {
        Self::init_from(Preferences::path()?)
    }

    /// [`PrefixTable::init`] with an explicit preference file
    pub fn init_from(path: impl AsRef<Path>) -> Result<Self> {
        let preferences = Preferences::load_from(path)?;
        Ok(Self::from_preferences(&preferences))
    }

    pub fn style(&self) -> PrefixStyle {
        self.style
    }

    /// Prefix to print before a message at `level`.
    ///
    /// `color_capable` comes from the sink. [`LogLevel::Disable`] has no
    /// prefix.
    #[inline]
    pub fn render(&self, level: LogLevel, color_capable: bool) -> &str {
        let prefix = &self.entries[level as usize];
        if color_capable {
            &prefix.colored
        } else {
            prefix.plain
        }
    }

    /// Like [`PrefixTable::render`] for a raw ordinal; unknown values render
    /// as an empty prefix.
    pub fn render_value(&self, value: u32, color_capable: bool) -> &str {
        match LogLevel::from_u32(value) {
            Some(level) => self.render(level, color_capable),
            None => "",
        }
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::new(PrefixStyle::default())
    }
}
