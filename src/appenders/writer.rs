//! Appender over any `std::io::Write`

use crate::core::{Appender, Result};
use std::io::Write;

/// Writes lines to an arbitrary writer: a file, a socket, an in-memory buffer.
///
/// Colors are off unless enabled with [`WriterAppender::with_colors`].
///
/// # Example
///
/// ```no_run
/// use rust_console_logger::appenders::WriterAppender;
/// use std::fs::File;
///
/// let file = File::create("/var/log/app.log").unwrap();
/// let appender = WriterAppender::new(std::io::BufWriter::new(file));
/// ```
pub struct WriterAppender<W: Write + Send> {
    writer: W,
    use_colors: bool,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            use_colors: false,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn supports_color(&self) -> bool {
        self.use_colors
    }

    fn name(&self) -> &str {
        "writer"
    }
}
