//! Channel tree traversal over the session directory.

use super::{WhisperError, WhisperResult, WhisperSettings};
use crate::whisper::{
    domain::{ChannelId, ChannelPath, DEFAULT_PATH_DELIMITER, WhisperDomainError},
    ports::SessionDirectory,
};
use std::collections::HashSet;
use std::sync::Arc;

/// Walks the channel forest one directory query at a time.
///
/// Nothing is cached between calls.
#[derive(Clone)]
pub struct ChannelTreeWalker<D>
where
    D: SessionDirectory,
{
    directory: Arc<D>,
    path_delimiter: String,
}

impl<D> ChannelTreeWalker<D>
where
    D: SessionDirectory,
{
    /// Creates a walker rendering paths with [`DEFAULT_PATH_DELIMITER`].
    #[must_use]
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            path_delimiter: DEFAULT_PATH_DELIMITER.to_owned(),
        }
    }

    /// Creates a walker rendering paths with the configured delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperDomainError::EmptyPathDelimiter`] when the settings
    /// carry an empty delimiter.
    pub fn with_settings(
        directory: Arc<D>,
        settings: &WhisperSettings,
    ) -> Result<Self, WhisperDomainError> {
        settings.validate()?;
        Ok(Self {
            directory,
            path_delimiter: settings.channel_path_delimiter.clone(),
        })
    }

    pub(crate) const fn directory(&self) -> &Arc<D> {
        &self.directory
    }

    /// Returns the parent of `channel`, or `None` for a top-level channel.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperError::Query`] when the directory call fails.
    pub async fn parent_of(&self, channel: ChannelId) -> WhisperResult<Option<ChannelId>> {
        let parent = self.directory.parent_channel_of(channel).await?;
        Ok((!parent.is_root()).then_some(parent))
    }

    /// Returns the ancestors of `channel`, nearest first, root excluded.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperError::Query`] on the first failed parent lookup and
    /// [`WhisperError::ChannelCycle`] when parent links loop.
    pub async fn ancestor_chain(&self, channel: ChannelId) -> WhisperResult<Vec<ChannelId>> {
        let mut chain = Vec::new();
        let mut visited = HashSet::from([channel]);
        let mut current = channel;
        while let Some(parent) = self.parent_of(current).await? {
            if !visited.insert(parent) {
                return Err(WhisperError::ChannelCycle(parent));
            }
            chain.push(parent);
            current = parent;
        }
        Ok(chain)
    }

    /// Returns the channels whose immediate parent is `channel`.
    ///
    /// This is a one-level scan of the channel list; grandchildren are not
    /// included.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperError::Query`] when listing channels or reading any
    /// parent fails.
    pub async fn sub_channels_of(&self, channel: ChannelId) -> WhisperResult<Vec<ChannelId>> {
        let mut children = Vec::new();
        for candidate in self.directory.channel_list().await? {
            if self.directory.parent_channel_of(candidate).await? == channel {
                children.push(candidate);
            }
        }
        Ok(children)
    }

    /// Returns the names from the top-level ancestor down to `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperError::Query`] when a name or parent lookup fails and
    /// [`WhisperError::ChannelCycle`] when parent links loop.
    pub async fn channel_path(&self, channel: ChannelId) -> WhisperResult<ChannelPath> {
        let mut names = vec![self.directory.channel_name(channel).await?];
        for ancestor in self.ancestor_chain(channel).await? {
            names.push(self.directory.channel_name(ancestor).await?);
        }
        names.reverse();
        Ok(ChannelPath::new(names)?)
    }

    /// Resolves a name path back to its channel.
    ///
    /// Returns `None` when no channel matches.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperError::Query`] when the directory call fails.
    pub async fn channel_from_path(&self, path: &ChannelPath) -> WhisperResult<Option<ChannelId>> {
        let channel = self.directory.channel_id_from_path(path).await?;
        Ok((!channel.is_root()).then_some(channel))
    }

    /// Renders the path of `channel` with the configured delimiter.
    ///
    /// # Errors
    ///
    /// Same as [`Self::channel_path`].
    pub async fn render_channel_path(&self, channel: ChannelId) -> WhisperResult<String> {
        Ok(self.channel_path(channel).await?.render(&self.path_delimiter))
    }

    /// Resolves a path rendered with the configured delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperError::Domain`] for an unparseable path and
    /// [`WhisperError::Query`] when the directory call fails.
    pub async fn channel_from_rendered_path(&self, raw: &str) -> WhisperResult<Option<ChannelId>> {
        let path = ChannelPath::parse(raw, &self.path_delimiter)?;
        self.channel_from_path(&path).await
    }
}
