//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod preferences;
pub mod prefix;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, DEFAULT_LEVEL};
pub use metrics::LoggerMetrics;
pub use preferences::{Preferences, PREFERENCE_FILE_NAME};
pub use prefix::{PrefixStyle, PrefixTable};
pub use timestamp::{TimeFormat, DEFAULT_TIME_FORMAT};
