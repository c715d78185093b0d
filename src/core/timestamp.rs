//! Timestamp formatting for log lines

use chrono::{DateTime, Local};
use std::fmt::Write;

/// Default layout: `2025/01/08 10:30`
pub const DEFAULT_TIME_FORMAT: &str = "%Y/%m/%d %H:%M";

/// strftime layout applied to local time, or nothing at all.
///
/// # Examples
///
/// ```
/// use rust_console_logger::TimeFormat;
///
/// assert_eq!(TimeFormat::default().layout(), Some("%Y/%m/%d %H:%M"));
/// assert!(TimeFormat::new("").is_disabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat {
    layout: Option<String>,
}

impl TimeFormat {
    /// An empty layout disables timestamps.
    pub fn new(layout: impl Into<String>) -> Self {
        let layout = layout.into();
        Self {
            layout: (!layout.is_empty()).then_some(layout),
        }
    }

    pub fn disabled() -> Self {
        Self { layout: None }
    }

    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.layout.is_none()
    }

    /// `None` when disabled or when the layout holds an invalid specifier.
    pub fn format(&self, time: &DateTime<Local>) -> Option<String> {
        let layout = self.layout.as_ref()?;
        let mut out = String::new();
        write!(out, "{}", time.format(layout)).ok()?;
        Some(out)
    }

    pub fn now(&self) -> Option<String> {
        if self.is_disabled() {
            return None;
        }
        self.format(&Local::now())
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FORMAT)
    }
}

impl From<&str> for TimeFormat {
    fn from(layout: &str) -> Self {
        Self::new(layout)
    }
}

impl From<String> for TimeFormat {
    fn from(layout: String) -> Self {
        Self::new(layout)
    }
}
