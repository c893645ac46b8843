//! Server group membership sets.

use super::{ServerGroupId, WhisperDomainError};
use std::collections::BTreeSet;

/// Set of server groups a client belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerGroupSet(BTreeSet<ServerGroupId>);

impl ServerGroupSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Parses the session's comma-separated representation, e.g. `"6,8,"`.
    ///
    /// Empty segments are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperDomainError::InvalidServerGroupList`] when a segment
    /// is not an unsigned integer.
    pub fn parse(raw: &str) -> Result<Self, WhisperDomainError> {
        raw.split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                segment
                    .parse::<u64>()
                    .map(ServerGroupId::new)
                    .map_err(|_| WhisperDomainError::InvalidServerGroupList(raw.to_owned()))
            })
            .collect()
    }

    /// Returns `true` when the client belongs to `group`.
    #[must_use]
    pub fn contains(&self, group: ServerGroupId) -> bool {
        self.0.contains(&group)
    }

    /// Iterates over the groups in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ServerGroupId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ServerGroupId> for ServerGroupSet {
    fn from_iter<I: IntoIterator<Item = ServerGroupId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
