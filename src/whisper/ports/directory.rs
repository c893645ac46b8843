//! Session directory port for queries and requests against the remote voice
//! session.

use crate::whisper::domain::{
    ChannelGroupId, ChannelId, ChannelPath, ClientId, ReturnCode, ServerGroupSet,
    WhisperListRequest,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session directory operations.
pub type SessionDirectoryResult<T> = Result<T, SessionDirectoryError>;

/// Read and request contract for one connected voice session.
///
/// Implementations hold no caches the whisper services depend on; every
/// attribute is read fresh on each call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionDirectory: Send + Sync {
    /// Returns the caller's own client id.
    async fn own_client_id(&self) -> SessionDirectoryResult<ClientId>;

    /// Lists every client visible in the session, caller included.
    async fn client_list(&self) -> SessionDirectoryResult<Vec<ClientId>>;

    /// Lists every channel in the session.
    async fn channel_list(&self) -> SessionDirectoryResult<Vec<ChannelId>>;

    /// Returns the parent of `channel`, or [`ChannelId::ROOT`] for a
    /// top-level channel.
    async fn parent_channel_of(&self, channel: ChannelId) -> SessionDirectoryResult<ChannelId>;

    /// Lists the clients currently in `channel`.
    async fn channel_client_list(&self, channel: ChannelId)
    -> SessionDirectoryResult<Vec<ClientId>>;

    /// Returns the channel `client` is in.
    async fn channel_of_client(&self, client: ClientId) -> SessionDirectoryResult<ChannelId>;

    /// Returns the server groups of `client`.
    async fn client_server_groups(&self, client: ClientId)
    -> SessionDirectoryResult<ServerGroupSet>;

    /// Returns the channel group `client` holds in its current channel.
    async fn client_channel_group(&self, client: ClientId)
    -> SessionDirectoryResult<ChannelGroupId>;

    /// Returns whether `client` is flagged as channel commander.
    async fn is_channel_commander(&self, client: ClientId) -> SessionDirectoryResult<bool>;

    /// Returns the display name of `client`.
    async fn client_display_name(&self, client: ClientId) -> SessionDirectoryResult<String>;

    /// Returns the name of `channel`.
    async fn channel_name(&self, channel: ChannelId) -> SessionDirectoryResult<String>;

    /// Resolves a root-first name path, or returns [`ChannelId::ROOT`] when
    /// no channel matches.
    async fn channel_id_from_path(&self, path: &ChannelPath) -> SessionDirectoryResult<ChannelId>;

    /// Submits a set-whisper-list request.
    ///
    /// # Errors
    ///
    /// Returns the session's rejection of the request. Acceptance does not
    /// mean the completion notification has been delivered.
    async fn request_set_whisper_list(
        &self,
        request: &WhisperListRequest,
    ) -> SessionDirectoryResult<()>;

    /// Requests a refresh of `caller`'s own client variables.
    async fn request_client_variables(
        &self,
        caller: ClientId,
        return_code: Option<ReturnCode>,
    ) -> SessionDirectoryResult<()>;
}

/// Numeric error code reported by the remote session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoteErrorCode(u32);

impl RemoteErrorCode {
    /// Creates an error code.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RemoteErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:#06x}", self.0)
    }
}

/// Errors returned by session directory implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionDirectoryError {
    /// The remote session rejected the call.
    #[error("session call failed with error code {0}")]
    Remote(RemoteErrorCode),

    /// The directory could not be reached.
    #[error("session directory unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionDirectoryError {
    /// Wraps an error code reported by the remote session.
    #[must_use]
    pub const fn remote(code: u32) -> Self {
        Self::Remote(RemoteErrorCode::new(code))
    }

    /// Wraps an adapter-side failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Returns the remote error code, if the session reported one.
    #[must_use]
    pub const fn remote_code(&self) -> Option<RemoteErrorCode> {
        match self {
            Self::Remote(code) => Some(*code),
            Self::Unavailable(_) => None,
        }
    }
}
