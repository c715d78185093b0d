//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::{IsTerminal, Write};

/// Standard stream a [`ConsoleAppender`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    Stdout,
    #[default]
    Stderr,
}

impl ConsoleTarget {
    fn is_terminal(self) -> bool {
        match self {
            ConsoleTarget::Stdout => std::io::stdout().is_terminal(),
            ConsoleTarget::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

/// Writes lines to stdout or stderr.
///
/// Color support is detected once, at construction: the stream must be a
/// terminal and the `NO_COLOR` / `CLICOLOR` / `CLICOLOR_FORCE` environment
/// must allow it. [`ConsoleAppender::with_colors`] overrides the detection.
pub struct ConsoleAppender {
    target: ConsoleTarget,
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new(target: ConsoleTarget) -> Self {
        Self {
            target,
            use_colors: detect_color(target),
        }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleTarget::Stderr)
    }

    /// Force colors on or off
    ///
    /// # Example
    ///
    /// ```
    /// use rust_console_logger::appenders::ConsoleAppender;
    /// use rust_console_logger::Appender;
    ///
    /// let appender = ConsoleAppender::stdout().with_colors(false);
    /// assert!(!appender.supports_color());
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::stderr()
    }
}

fn detect_color(target: ConsoleTarget) -> bool {
    target.is_terminal() && colored::control::SHOULD_COLORIZE.should_colorize()
}

impl Appender for ConsoleAppender {
    fn write_line(&mut self, line: &str) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(line.as_bytes())?,
            ConsoleTarget::Stderr => std::io::stderr().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn supports_color(&self) -> bool {
        self.use_colors
    }

    fn name(&self) -> &str {
        "console"
    }
}
