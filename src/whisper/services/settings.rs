//! Settings consumed by the whisper services.

use crate::whisper::domain::{DEFAULT_PATH_DELIMITER, WhisperDomainError};
use serde::{Deserialize, Serialize};

/// Tunables for whisper submission and channel path handling.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhisperSettings {
    /// Look up and log the display names of client targets at debug level.
    pub log_target_names: bool,
    /// Delimiter between channel names in rendered channel paths.
    pub channel_path_delimiter: String,
}

impl Default for WhisperSettings {
    fn default() -> Self {
        Self {
            log_target_names: true,
            channel_path_delimiter: DEFAULT_PATH_DELIMITER.to_owned(),
        }
    }
}

impl WhisperSettings {
    /// Checks the settings for values the services cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperDomainError::EmptyPathDelimiter`] for an empty
    /// channel path delimiter.
    pub fn validate(&self) -> Result<(), WhisperDomainError> {
        if self.channel_path_delimiter.is_empty() {
            return Err(WhisperDomainError::EmptyPathDelimiter);
        }
        Ok(())
    }
}
