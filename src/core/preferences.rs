//! Per-user preference file
//!
//! The preference file lives at `<home>/.golog` and holds a single JSON
//! object. Only `UseShortMessages` is recognized; any other field is ignored.
//!
//! ```json
//! { "UseShortMessages": true }
//! ```

use super::error::{LoggerError, Result};
use super::prefix::PrefixStyle;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// File name of the preference file inside the user's home directory
pub const PREFERENCE_FILE_NAME: &str = ".golog";

const USE_SHORT_MESSAGES: &str = "UseShortMessages";

/// Decoded contents of the preference file.
///
/// Keys match `UseShortMessages` ignoring ASCII case. A `null` value counts
/// as absent, and when a key repeats the last value wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    /// Render `[WARN]` instead of `[WARNING]` and so on
    #[serde(rename = "UseShortMessages")]
    pub use_short_messages: bool,
}

impl<'de> Deserialize<'de> for Preferences {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PreferencesVisitor)
    }
}

struct PreferencesVisitor;

impl<'de> Visitor<'de> for PreferencesVisitor {
    type Value = Preferences;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a preference object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Preferences, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut preferences = Preferences::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(USE_SHORT_MESSAGES) {
                if let Some(value) = map.next_value::<Option<bool>>()? {
                    preferences.use_short_messages = value;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(preferences)
    }
}

impl Preferences {
    /// Location of the current user's preference file
    pub fn path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(PREFERENCE_FILE_NAME))
            .ok_or(LoggerError::HomeDirUnavailable)
    }

    /// Load the current user's preferences.
    ///
    /// Every failure is returned to the caller: an unresolvable home
    /// directory, a missing or unreadable file, and malformed content.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    /// Load preferences from an explicit file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let file = File::open(path).map_err(|e| LoggerError::preference_file(&display, e))?;
        Self::decode(BufReader::new(file), &display)
    }

    /// Decode preferences from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::decode(reader, "<reader>")
    }

    /// Only the first JSON value is decoded; whatever follows it is left unread.
    /// A top-level `null` decodes as the defaults.
    fn decode<R: Read>(reader: R, origin: &str) -> Result<Self> {
        let mut values =
            serde_json::Deserializer::from_reader(reader).into_iter::<Option<Preferences>>();
        match values.next() {
            Some(Ok(preferences)) => Ok(preferences.unwrap_or_default()),
            Some(Err(e)) => Err(LoggerError::preference_parse(origin, e)),
            None => Err(LoggerError::preference_empty(origin)),
        }
    }

    pub fn style(&self) -> PrefixStyle {
        PrefixStyle::from_short(self.use_short_messages)
    }
}
