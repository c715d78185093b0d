//! Basic logger usage example
//!
//! Reads `~/.golog` to pick short or long prefixes, then logs at every level.
//! Startup fails if the preference file is missing or malformed.
//!
//! Run with: cargo run --example basic

use rust_console_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    let prefixes = Arc::new(PrefixTable::init()?);

    // Output defaults to stderr
    let logger = Logger::new(prefixes);

    // Time format defaults to "%Y/%m/%d %H:%M"; an empty layout disables it
    logger.set_time_format("");

    // Level defaults to "info"
    logger.set_level_name("debug");

    logger.println("This is a raw message, no levels, no colors.");
    logger.info("This is an info message, with colors (if the output is terminal)");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.debug("This is a debug message");

    logger.flush()
}
