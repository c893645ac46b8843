//! Target-mode and whisper-type selectors.

use super::{ParseTargetModeError, ParseWhisperTypeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope of the channel tree a whisper addresses, relative to the caller's
/// current channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMode {
    /// Every client on the server.
    All,
    /// The caller's current channel.
    CurrentChannel,
    /// The immediate parent of the caller's channel.
    ParentChannel,
    /// Every ancestor of the caller's channel, nearest first.
    AllParentChannels,
    /// The caller's channel and its direct subchannels.
    ChannelFamily,
    /// Ancestor channels together with their families.
    ///
    /// Resolves to no channels.
    AncestorChannelFamily,
    /// The direct subchannels of the caller's channel.
    SubChannels,
}

impl TargetMode {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::CurrentChannel => "current_channel",
            Self::ParentChannel => "parent_channel",
            Self::AllParentChannels => "all_parent_channels",
            Self::ChannelFamily => "channel_family",
            Self::AncestorChannelFamily => "ancestor_channel_family",
            Self::SubChannels => "sub_channels",
        }
    }

    /// Returns the numeric code used by the host plugin API.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::All => 0,
            Self::CurrentChannel => 1,
            Self::ParentChannel => 2,
            Self::AllParentChannels => 3,
            Self::ChannelFamily => 4,
            Self::AncestorChannelFamily => 5,
            Self::SubChannels => 6,
        }
    }
}

impl fmt::Display for TargetMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TargetMode {
    type Error = ParseTargetModeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "current_channel" => Ok(Self::CurrentChannel),
            "parent_channel" => Ok(Self::ParentChannel),
            "all_parent_channels" => Ok(Self::AllParentChannels),
            "channel_family" => Ok(Self::ChannelFamily),
            "ancestor_channel_family" => Ok(Self::AncestorChannelFamily),
            "sub_channels" => Ok(Self::SubChannels),
            _ => Err(ParseTargetModeError(value.to_owned())),
        }
    }
}

impl TryFrom<u8> for TargetMode {
    type Error = ParseTargetModeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::All),
            1 => Ok(Self::CurrentChannel),
            2 => Ok(Self::ParentChannel),
            3 => Ok(Self::AllParentChannels),
            4 => Ok(Self::ChannelFamily),
            5 => Ok(Self::AncestorChannelFamily),
            6 => Ok(Self::SubChannels),
            _ => Err(ParseTargetModeError(value.to_string())),
        }
    }
}

/// Membership criterion applied to the clients inside a target scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhisperType {
    /// Clients belonging to a given server group.
    ServerGroup,
    /// Clients holding a given channel group.
    ChannelGroup,
    /// Clients flagged as channel commander.
    ChannelCommander,
    /// Everyone in scope, unfiltered.
    AllClients,
}

impl WhisperType {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServerGroup => "server_group",
            Self::ChannelGroup => "channel_group",
            Self::ChannelCommander => "channel_commander",
            Self::AllClients => "all_clients",
        }
    }

    /// Returns the numeric code used by the host plugin API.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::ServerGroup => 0,
            Self::ChannelGroup => 1,
            Self::ChannelCommander => 2,
            Self::AllClients => 3,
        }
    }
}

impl fmt::Display for WhisperType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for WhisperType {
    type Error = ParseWhisperTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "server_group" => Ok(Self::ServerGroup),
            "channel_group" => Ok(Self::ChannelGroup),
            "channel_commander" => Ok(Self::ChannelCommander),
            "all_clients" => Ok(Self::AllClients),
            _ => Err(ParseWhisperTypeError(value.to_owned())),
        }
    }
}

impl TryFrom<u8> for WhisperType {
    type Error = ParseWhisperTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::ServerGroup),
            1 => Ok(Self::ChannelGroup),
            2 => Ok(Self::ChannelCommander),
            3 => Ok(Self::AllClients),
            _ => Err(ParseWhisperTypeError(value.to_string())),
        }
    }
}
