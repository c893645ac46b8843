//! Error types for the `server_info` domain.

use thiserror::Error;

/// Error returned when a group database type code is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown group database type: {0}")]
pub struct ParseGroupDbTypeError(pub u8);
