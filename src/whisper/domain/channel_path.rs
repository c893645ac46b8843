//! Name paths through the channel tree.

use super::WhisperDomainError;
use std::fmt;

/// Delimiter placed between channel names in a rendered path.
pub const DEFAULT_PATH_DELIMITER: &str = "__CH_DELIM__";

/// Channel names from the top-level channel down to a target channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelPath(Vec<String>);

impl ChannelPath {
    /// Creates a path from root-first channel names.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperDomainError::EmptyChannelPath`] when no names are
    /// given.
    pub fn new(names: impl IntoIterator<Item = String>) -> Result<Self, WhisperDomainError> {
        let collected: Vec<String> = names.into_iter().collect();
        if collected.is_empty() {
            return Err(WhisperDomainError::EmptyChannelPath);
        }
        Ok(Self(collected))
    }

    /// Parses a rendered path.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperDomainError::EmptyPathDelimiter`] for an empty
    /// delimiter and [`WhisperDomainError::EmptyChannelPath`] for empty input.
    pub fn parse(raw: &str, delimiter: &str) -> Result<Self, WhisperDomainError> {
        if delimiter.is_empty() {
            return Err(WhisperDomainError::EmptyPathDelimiter);
        }
        if raw.is_empty() {
            return Err(WhisperDomainError::EmptyChannelPath);
        }
        Self::new(raw.split(delimiter).map(str::to_owned))
    }

    /// Renders the path with `delimiter` between names.
    #[must_use]
    pub fn render(&self, delimiter: &str) -> String {
        self.0.join(delimiter)
    }

    /// Returns the root-first channel names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ChannelPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.render(DEFAULT_PATH_DELIMITER))
    }
}
