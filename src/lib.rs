//! # Rust Console Logger
//!
//! A minimal leveled console logger.
//!
//! ## Features
//!
//! - **Five ordered levels**: `Disable < Error < Warn < Info < Debug`
//! - **Short or long prefixes**: `[WARN]` or `[WARNING]`, picked once from the
//!   per-user `~/.golog` preference file
//! - **Color aware**: prefixes are highlighted only when the output can show it
//! - **Thread safe**: prefixes are precomputed and immutable; writes are serialized
//!
//! ## Example
//!
//! ```no_run
//! use rust_console_logger::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> Result<()> {
//!     let prefixes = Arc::new(PrefixTable::init()?);
//!     let logger = Logger::new(prefixes);
//!     logger.set_level_name("debug");
//!     logger.info("server started");
//!     Ok(())
//! }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, ConsoleTarget, WriterAppender};
    pub use crate::core::{
        Appender, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Preferences,
        PrefixStyle, PrefixTable, Result, TimeFormat, DEFAULT_LEVEL, DEFAULT_TIME_FORMAT,
        PREFERENCE_FILE_NAME,
    };
}

pub use appenders::{ConsoleAppender, ConsoleTarget, WriterAppender};
pub use core::{
    Appender, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Preferences,
    PrefixStyle, PrefixTable, Result, TimeFormat, DEFAULT_LEVEL, DEFAULT_TIME_FORMAT,
    PREFERENCE_FILE_NAME,
};
