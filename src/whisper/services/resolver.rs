//! Target-mode resolution.

use super::{ChannelTreeWalker, WhisperError, WhisperResult};
use crate::whisper::{
    domain::{ChannelId, ChannelScope, ClientId, TargetMode},
    ports::SessionDirectory,
};
use std::sync::Arc;
use tracing::debug;

/// Turns a [`TargetMode`] into the channel scope it addresses.
#[derive(Clone)]
pub struct TargetModeResolver<D>
where
    D: SessionDirectory,
{
    walker: ChannelTreeWalker<D>,
}

impl<D> TargetModeResolver<D>
where
    D: SessionDirectory,
{
    /// Creates a resolver over `directory`.
    #[must_use]
    pub fn new(directory: Arc<D>) -> Self {
        Self::with_walker(ChannelTreeWalker::new(directory))
    }

    /// Creates a resolver that walks the tree through `walker`.
    #[must_use]
    pub const fn with_walker(walker: ChannelTreeWalker<D>) -> Self {
        Self { walker }
    }

    /// Returns the walker the resolver queries.
    #[must_use]
    pub const fn walker(&self) -> &ChannelTreeWalker<D> {
        &self.walker
    }

    /// Resolves `mode` relative to the channel `caller` is in.
    ///
    /// [`TargetMode::All`] needs no channel and issues no query.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperError::Query`] when the caller's channel or the
    /// channel tree cannot be read, plus the errors of
    /// [`Self::resolve_from`].
    pub async fn resolve(&self, caller: ClientId, mode: TargetMode) -> WhisperResult<ChannelScope> {
        if mode == TargetMode::All {
            return Ok(ChannelScope::AllClients);
        }
        let current = self.walker.directory().channel_of_client(caller).await?;
        self.resolve_from(current, mode).await
    }

    /// Resolves `mode` relative to `current`.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperError::NoParentChannel`] for
    /// [`TargetMode::ParentChannel`] on a top-level channel. Walker errors
    /// propagate unchanged.
    pub async fn resolve_from(
        &self,
        current: ChannelId,
        mode: TargetMode,
    ) -> WhisperResult<ChannelScope> {
        let channels = match mode {
            TargetMode::All => return Ok(ChannelScope::AllClients),
            TargetMode::CurrentChannel => vec![current],
            TargetMode::ParentChannel => {
                let parent = self
                    .walker
                    .parent_of(current)
                    .await?
                    .ok_or(WhisperError::NoParentChannel(current))?;
                vec![parent]
            }
            TargetMode::AllParentChannels => self.walker.ancestor_chain(current).await?,
            TargetMode::ChannelFamily => {
                let mut family = self.walker.sub_channels_of(current).await?;
                family.push(current);
                family
            }
            TargetMode::SubChannels => self.walker.sub_channels_of(current).await?,
            TargetMode::AncestorChannelFamily => {
                // Ancestor families are not defined yet.
                debug!(channel = %current, "ancestor channel family resolves to no channels");
                Vec::new()
            }
        };
        Ok(ChannelScope::Channels(channels))
    }
}
