//! Resolved whisper scopes and target sets.

use super::{ChannelId, ClientId, SentinelId};
use std::collections::HashSet;
use std::hash::Hash;

/// Output of target-mode resolution, before membership filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelScope {
    /// Address every client in the session.
    AllClients,
    /// Address the listed channels. May be empty.
    Channels(Vec<ChannelId>),
}

/// Final whisper target set.
///
/// Channel and client targets are mutually exclusive. Every id is unique,
/// channel targets never contain the root marker, and client targets never
/// contain the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhisperTargets {
    /// Nothing to whisper to.
    Empty,
    /// Whisper to everyone in the listed channels.
    Channels(Vec<ChannelId>),
    /// Whisper to the listed clients.
    Clients(Vec<ClientId>),
}

impl WhisperTargets {
    /// Builds channel targets, keeping first occurrences in order and
    /// dropping the root marker.
    pub fn from_channels(channels: impl IntoIterator<Item = ChannelId>) -> Self {
        let unique = unique_in_order(channels.into_iter().filter(|channel| !channel.is_root()));
        if unique.is_empty() {
            return Self::Empty;
        }
        Self::Channels(unique)
    }

    /// Builds client targets, keeping first occurrences in order and
    /// dropping the caller and the array terminator.
    pub fn from_clients(clients: impl IntoIterator<Item = ClientId>, caller: ClientId) -> Self {
        let unique = unique_in_order(
            clients
                .into_iter()
                .filter(|client| *client != caller && *client != ClientId::SENTINEL),
        );
        if unique.is_empty() {
            return Self::Empty;
        }
        Self::Clients(unique)
    }

    /// Returns `true` when there is nothing to whisper to.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the channel targets, empty for client targets.
    #[must_use]
    pub fn channel_ids(&self) -> &[ChannelId] {
        match self {
            Self::Channels(channels) => channels,
            Self::Empty | Self::Clients(_) => &[],
        }
    }

    /// Returns the client targets, empty for channel targets.
    #[must_use]
    pub fn client_ids(&self) -> &[ClientId] {
        match self {
            Self::Clients(clients) => clients,
            Self::Empty | Self::Channels(_) => &[],
        }
    }
}

pub(crate) fn unique_in_order<T: Copy + Eq + Hash>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}
