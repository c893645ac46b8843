//! Wire shape of the set-whisper-list request.
//!
//! The session API takes id arrays terminated by a zero sentinel and expects
//! an absent array, not a sentinel-only one, for an empty list.

use super::{ChannelId, ClientId, ReturnCode, WhisperTargets};

/// Identifier with a reserved array terminator value.
pub trait SentinelId: Copy + Eq {
    /// Terminator appended to every non-empty array.
    const SENTINEL: Self;
}

impl SentinelId for ChannelId {
    const SENTINEL: Self = Self::ROOT;
}

impl SentinelId for ClientId {
    const SENTINEL: Self = Self::new(0);
}

/// Non-empty, sentinel-terminated id array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminatedIds<T: SentinelId>(Vec<T>);

impl<T: SentinelId> TerminatedIds<T> {
    /// Terminates `ids`, or returns `None` when there are none.
    ///
    /// Sentinel values inside `ids` are skipped so the array cannot end
    /// early.
    #[must_use]
    pub fn from_ids(ids: &[T]) -> Option<Self> {
        let mut terminated: Vec<T> = ids
            .iter()
            .copied()
            .filter(|id| *id != T::SENTINEL)
            .collect();
        if terminated.is_empty() {
            return None;
        }
        terminated.push(T::SENTINEL);
        Some(Self(terminated))
    }

    /// Returns the array including its terminator.
    #[must_use]
    pub fn as_terminated(&self) -> &[T] {
        &self.0
    }

    /// Returns the ids without the terminator.
    #[must_use]
    pub fn ids(&self) -> &[T] {
        self.0.split_last().map_or(&[], |(_, ids)| ids)
    }
}

/// Arguments of a set-whisper-list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhisperListRequest {
    caller: ClientId,
    channels: Option<TerminatedIds<ChannelId>>,
    clients: Option<TerminatedIds<ClientId>>,
    return_code: Option<ReturnCode>,
}

impl WhisperListRequest {
    /// Encodes resolved targets for submission on behalf of `caller`.
    #[must_use]
    pub fn new(caller: ClientId, targets: &WhisperTargets, return_code: Option<ReturnCode>) -> Self {
        Self {
            caller,
            channels: TerminatedIds::from_ids(targets.channel_ids()),
            clients: TerminatedIds::from_ids(targets.client_ids()),
            return_code,
        }
    }

    /// Returns the client whose whisper list is set.
    #[must_use]
    pub const fn caller(&self) -> ClientId {
        self.caller
    }

    /// Returns the channel array, absent when no channel is targeted.
    #[must_use]
    pub const fn channels(&self) -> Option<&TerminatedIds<ChannelId>> {
        self.channels.as_ref()
    }

    /// Returns the client array, absent when no client is targeted.
    #[must_use]
    pub const fn clients(&self) -> Option<&TerminatedIds<ClientId>> {
        self.clients.as_ref()
    }

    /// Returns the correlation token, if any.
    #[must_use]
    pub const fn return_code(&self) -> Option<&ReturnCode> {
        self.return_code.as_ref()
    }
}
