//! Validated membership filters.

use super::{ChannelGroupId, GroupArgument, ServerGroupId, WhisperDomainError, WhisperType};

/// Membership criterion derived from a whisper type and its group argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipFilter {
    /// Keep every candidate.
    Unfiltered,
    /// Keep candidates belonging to the server group.
    ServerGroup(ServerGroupId),
    /// Keep candidates holding the channel group.
    ///
    /// `None` defers to the caller's own channel group.
    ChannelGroup(Option<ChannelGroupId>),
    /// Keep candidates flagged as channel commander.
    ChannelCommander,
}

impl MembershipFilter {
    /// Builds the filter for a whisper type.
    ///
    /// The channel commander filter ignores the argument.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperDomainError::MissingArgument`] for
    /// [`WhisperType::ServerGroup`] without a group argument.
    pub fn for_type(
        whisper_type: WhisperType,
        argument: Option<GroupArgument>,
    ) -> Result<Self, WhisperDomainError> {
        match whisper_type {
            WhisperType::AllClients => Ok(Self::Unfiltered),
            WhisperType::ServerGroup => match argument {
                Some(group) => Ok(Self::ServerGroup(group.as_server_group())),
                None => Err(WhisperDomainError::MissingArgument(whisper_type)),
            },
            WhisperType::ChannelGroup => Ok(Self::ChannelGroup(
                argument.map(GroupArgument::as_channel_group),
            )),
            WhisperType::ChannelCommander => Ok(Self::ChannelCommander),
        }
    }

    /// Returns `true` when the filter keeps every candidate.
    #[must_use]
    pub const fn is_unfiltered(self) -> bool {
        matches!(self, Self::Unfiltered)
    }
}
