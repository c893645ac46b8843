//! Group database types reported with each listed group.

use super::ParseGroupDbTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage class of a permission group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupDbType {
    /// Template used when creating virtual servers.
    Template,
    /// Ordinary group assignable to clients.
    Regular,
    /// Group for server query logins.
    Query,
}

impl GroupDbType {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Regular => "regular",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for GroupDbType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<u8> for GroupDbType {
    type Error = ParseGroupDbTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Template),
            1 => Ok(Self::Regular),
            2 => Ok(Self::Query),
            _ => Err(ParseGroupDbTypeError(value)),
        }
    }
}
