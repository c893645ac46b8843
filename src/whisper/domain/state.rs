//! Protocol state of a submitted whisper list.
//!
//! The session does not deliver the completion notification of a
//! set-whisper-list request that carries a return code. A refresh of the
//! caller's own client variables with the same return code is sent right
//! after a successful submission; its notification stands in for the lost
//! one.

use super::WhisperDomainError;
use std::fmt;

/// Progress of a whisper-list submission towards its completion notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhisperListState {
    /// The set-whisper-list request was accepted.
    Submitted,
    /// The compensating refresh was accepted under the same return code.
    CompensationSent,
    /// The completion notification was observed, or none is expected.
    Complete,
}

impl WhisperListState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::CompensationSent => "compensation_sent",
            Self::Complete => "complete",
        }
    }

    /// Returns `true` when moving to `next` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Submitted, Self::CompensationSent | Self::Complete)
                | (Self::CompensationSent, Self::Complete)
        )
    }

    /// Moves to `next`.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperDomainError::InvalidStateTransition`] when the
    /// transition is not allowed.
    pub fn transition_to(self, next: Self) -> Result<Self, WhisperDomainError> {
        if !self.can_transition_to(next) {
            return Err(WhisperDomainError::InvalidStateTransition {
                from: self.as_str().to_owned(),
                to: next.as_str().to_owned(),
            });
        }
        Ok(next)
    }
}

impl fmt::Display for WhisperListState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
