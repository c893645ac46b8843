//! Whisper resolution requests and correlation tokens.

use super::{GroupArgument, TargetMode, WhisperDomainError, WhisperType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque correlation token matching a completion notification to the
/// request that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnCode(String);

impl ReturnCode {
    /// Creates a return code.
    ///
    /// The value is kept verbatim; only the empty string is refused.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperDomainError::EmptyReturnCode`] for an empty value.
    pub fn new(value: impl Into<String>) -> Result<Self, WhisperDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(WhisperDomainError::EmptyReturnCode);
        }
        Ok(Self(raw))
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ReturnCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A single whisper-list resolution request.
///
/// Built once per invocation and consumed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    mode: TargetMode,
    whisper_type: WhisperType,
    group_argument: Option<GroupArgument>,
    return_code: Option<ReturnCode>,
}

impl ResolutionRequest {
    /// Creates a request without group argument or return code.
    #[must_use]
    pub const fn new(mode: TargetMode, whisper_type: WhisperType) -> Self {
        Self {
            mode,
            whisper_type,
            group_argument: None,
            return_code: None,
        }
    }

    /// Sets the raw group argument. Zero clears it.
    #[must_use]
    pub const fn with_group_argument(mut self, value: u64) -> Self {
        self.group_argument = GroupArgument::new(value);
        self
    }

    /// Sets the correlation token.
    #[must_use]
    pub fn with_return_code(mut self, return_code: ReturnCode) -> Self {
        self.return_code = Some(return_code);
        self
    }

    /// Returns the target mode.
    #[must_use]
    pub const fn mode(&self) -> TargetMode {
        self.mode
    }

    /// Returns the whisper type.
    #[must_use]
    pub const fn whisper_type(&self) -> WhisperType {
        self.whisper_type
    }

    /// Returns the group argument, if any.
    #[must_use]
    pub const fn group_argument(&self) -> Option<GroupArgument> {
        self.group_argument
    }

    /// Returns the correlation token, if any.
    #[must_use]
    pub const fn return_code(&self) -> Option<&ReturnCode> {
        self.return_code.as_ref()
    }
}
