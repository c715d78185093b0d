//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The current user's home directory could not be determined
    #[error("Unable to resolve the current user's home directory")]
    HomeDirUnavailable,

    /// Preference file could not be opened or read
    #[error("Cannot read preference file '{path}': {source}")]
    PreferenceFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Preference file exists but holds no JSON value
    #[error("Preference file '{path}' is empty")]
    PreferenceEmpty { path: String },

    /// Preference file content is not a valid preference record
    #[error("Malformed preference file '{path}': {source}")]
    PreferenceParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create a preference file read error
    pub fn preference_file(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::PreferenceFile {
            path: path.into(),
            source,
        }
    }

    /// Create an empty preference file error
    pub fn preference_empty(path: impl Into<String>) -> Self {
        LoggerError::PreferenceEmpty { path: path.into() }
    }

    /// Create a malformed preference file error
    pub fn preference_parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        LoggerError::PreferenceParse {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from resolving the preference file
    pub fn is_preference_error(&self) -> bool {
        matches!(
            self,
            LoggerError::HomeDirUnavailable
                | LoggerError::PreferenceFile { .. }
                | LoggerError::PreferenceEmpty { .. }
                | LoggerError::PreferenceParse { .. }
        )
    }
}
