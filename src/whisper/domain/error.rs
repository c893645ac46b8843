//! Error types for whisper domain validation and parsing.

use super::WhisperType;
use thiserror::Error;

/// Errors returned while constructing or transitioning whisper domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WhisperDomainError {
    /// The whisper type needs a group argument but none was supplied.
    #[error("whisper type {0} requires a group argument")]
    MissingArgument(WhisperType),

    /// A correlation token must carry at least one character.
    #[error("return code must not be empty")]
    EmptyReturnCode,

    /// A server group list contains a segment that is not a group id.
    #[error("invalid server group list '{0}', expected comma-separated group ids")]
    InvalidServerGroupList(String),

    /// A channel path has no segments.
    #[error("channel path must contain at least one channel name")]
    EmptyChannelPath,

    /// The channel path delimiter is empty.
    #[error("channel path delimiter must not be empty")]
    EmptyPathDelimiter,

    /// Transitioning between two whisper-list protocol states is invalid.
    #[error("invalid whisper list state transition: {from} -> {to}")]
    InvalidStateTransition {
        /// Current protocol state.
        from: String,
        /// Requested target state.
        to: String,
    },

    /// A completion notification arrived for a different correlation token.
    #[error("completion for return code '{actual}' does not match pending '{expected}'")]
    UnexpectedReturnCode {
        /// Token the submission is waiting for, empty when it has none.
        expected: String,
        /// Token carried by the notification.
        actual: String,
    },
}

/// Error returned while parsing a target mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown whisper target mode: {0}")]
pub struct ParseTargetModeError(pub String);

/// Error returned while parsing a whisper type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown whisper type: {0}")]
pub struct ParseWhisperTypeError(pub String);
