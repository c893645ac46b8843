//! Membership filtering of candidate clients.

use super::WhisperResult;
use crate::whisper::{
    domain::{
        ChannelId, ClientId, GroupArgument, MembershipFilter, WhisperType, unique_in_order,
    },
    ports::SessionDirectory,
};
use std::sync::Arc;
use tracing::error;

/// Narrows candidate clients by server group, channel group, or channel
/// commander status.
///
/// Filtering is all-or-nothing: the first failed attribute query aborts
/// the pass and no partial result is returned.
#[derive(Clone)]
pub struct TypeFilter<D>
where
    D: SessionDirectory,
{
    directory: Arc<D>,
}

impl<D> TypeFilter<D>
where
    D: SessionDirectory,
{
    /// Creates a filter.
    #[must_use]
    pub const fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Collects the members of `channels`, caller excluded.
    ///
    /// A client listed in several channels is kept once, at its first
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`super::WhisperError::Query`] when a member list cannot be
    /// read.
    pub async fn expand_channels(
        &self,
        caller: ClientId,
        channels: &[ChannelId],
    ) -> WhisperResult<Vec<ClientId>> {
        let mut members = Vec::new();
        for channel in channels {
            let clients = self.directory.channel_client_list(*channel).await?;
            members.extend(clients.into_iter().filter(|client| *client != caller));
        }
        Ok(unique_in_order(members))
    }

    /// Filters `candidates` by `whisper_type` and its group argument.
    ///
    /// # Errors
    ///
    /// Returns [`super::WhisperError::Domain`] when a server group filter has
    /// no argument, before any query is made, and
    /// [`super::WhisperError::Query`] when an attribute query fails.
    pub async fn filter(
        &self,
        caller: ClientId,
        candidates: Vec<ClientId>,
        whisper_type: WhisperType,
        argument: Option<GroupArgument>,
    ) -> WhisperResult<Vec<ClientId>> {
        let membership = MembershipFilter::for_type(whisper_type, argument).inspect_err(|_| {
            error!(%whisper_type, "no target group specified, aborting");
        })?;
        self.apply(caller, candidates, membership).await
    }

    /// Applies an already validated membership filter.
    ///
    /// # Errors
    ///
    /// Returns [`super::WhisperError::Query`] when an attribute query fails.
    pub async fn apply(
        &self,
        caller: ClientId,
        candidates: Vec<ClientId>,
        membership: MembershipFilter,
    ) -> WhisperResult<Vec<ClientId>> {
        let mut kept = Vec::with_capacity(candidates.len());
        match membership {
            MembershipFilter::Unfiltered => return Ok(candidates),
            MembershipFilter::ServerGroup(group) => {
                for client in candidates {
                    if self.directory.client_server_groups(client).await?.contains(group) {
                        kept.push(client);
                    }
                }
            }
            MembershipFilter::ChannelGroup(group) => {
                let target_group = match group {
                    Some(requested) => requested,
                    None => self.directory.client_channel_group(caller).await?,
                };
                for client in candidates {
                    if self.directory.client_channel_group(client).await? == target_group {
                        kept.push(client);
                    }
                }
            }
            MembershipFilter::ChannelCommander => {
                for client in candidates {
                    if self.directory.is_channel_commander(client).await? {
                        kept.push(client);
                    }
                }
            }
        }
        Ok(kept)
    }
}
