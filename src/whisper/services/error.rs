//! Service-level errors for whisper resolution and submission.

use crate::whisper::{
    domain::{ChannelId, WhisperDomainError},
    ports::SessionDirectoryError,
};
use thiserror::Error;

/// Errors returned by the whisper services.
#[derive(Debug, Clone, Error)]
pub enum WhisperError {
    /// A session query failed while resolving or filtering targets.
    #[error("session query failed: {0}")]
    Query(#[from] SessionDirectoryError),

    /// Domain validation failed, e.g. a missing group argument.
    #[error(transparent)]
    Domain(#[from] WhisperDomainError),

    /// The parent channel was requested for a top-level channel.
    #[error("channel {0} has no parent channel")]
    NoParentChannel(ChannelId),

    /// Parent links lead back to an already visited channel.
    #[error("channel hierarchy loops back to channel {0}")]
    ChannelCycle(ChannelId),

    /// The session rejected the set-whisper-list request.
    #[error("set whisper list request rejected: {0}")]
    SubmitFailed(SessionDirectoryError),

    /// The compensating client variable refresh was rejected.
    ///
    /// The whisper list itself is active when this is reported.
    #[error("compensating client variable request failed: {0}")]
    CompensationFailed(SessionDirectoryError),
}

/// Result type for whisper service operations.
pub type WhisperResult<T> = Result<T, WhisperError>;
