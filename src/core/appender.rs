//! Appender trait for the log output destination

use super::error::Result;

pub trait Appender: Send {
    /// Write one complete line; `line` carries its trailing newline.
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    /// Whether ANSI color sequences will display correctly on this output
    fn supports_color(&self) -> bool;
    fn name(&self) -> &str;
}
