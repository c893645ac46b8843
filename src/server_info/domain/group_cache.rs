//! Name caches fed by group list events.

use super::GroupDbType;
use crate::whisper::domain::{ChannelGroupId, ServerGroupId};
use std::collections::BTreeMap;

/// One listing being accumulated from host events.
#[derive(Debug, Clone)]
struct Listing<K> {
    names: BTreeMap<K, String>,
    updating: bool,
}

impl<K: Ord> Listing<K> {
    const fn new() -> Self {
        Self {
            names: BTreeMap::new(),
            updating: false,
        }
    }

    fn insert(&mut self, id: K, name: String) {
        if !self.updating {
            self.names.clear();
        }
        self.names.insert(id, name);
        self.updating = true;
    }

    const fn finish(&mut self) -> &BTreeMap<K, String> {
        self.updating = false;
        &self.names
    }
}

/// Latest server group and channel group listings of a session.
///
/// The first entry of a listing replaces whatever the previous listing
/// held; a finished event closes the listing. Lookups always see the
/// entries received so far.
#[derive(Debug, Clone)]
pub struct GroupNameCache {
    server_groups: Listing<ServerGroupId>,
    channel_groups: Listing<ChannelGroupId>,
}

impl Default for GroupNameCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupNameCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            server_groups: Listing::new(),
            channel_groups: Listing::new(),
        }
    }

    /// Records one entry of a server group listing.
    pub fn on_server_group_listed(&mut self, id: ServerGroupId, name: impl Into<String>) {
        self.server_groups.insert(id, name.into());
    }

    /// Closes the server group listing and returns it.
    pub const fn finish_server_group_list(&mut self) -> &BTreeMap<ServerGroupId, String> {
        self.server_groups.finish()
    }

    /// Records one entry of a channel group listing.
    ///
    /// Template and query groups are ignored.
    pub fn on_channel_group_listed(
        &mut self,
        id: ChannelGroupId,
        name: impl Into<String>,
        db_type: GroupDbType,
    ) {
        if db_type != GroupDbType::Regular {
            return;
        }
        self.channel_groups.insert(id, name.into());
    }

    /// Closes the channel group listing and returns it.
    pub const fn finish_channel_group_list(&mut self) -> &BTreeMap<ChannelGroupId, String> {
        self.channel_groups.finish()
    }

    /// Returns the lowest server group id named `name`.
    #[must_use]
    pub fn server_group_id(&self, name: &str) -> Option<ServerGroupId> {
        self.server_groups
            .names
            .iter()
            .find(|(_, candidate)| candidate.as_str() == name)
            .map(|(id, _)| *id)
    }

    /// Returns the name of server group `id`.
    #[must_use]
    pub fn server_group_name(&self, id: ServerGroupId) -> Option<&str> {
        self.server_groups.names.get(&id).map(String::as_str)
    }

    /// Returns the highest channel group id named `name`.
    ///
    /// Several channel groups may share a name; the most recently created
    /// one wins.
    #[must_use]
    pub fn channel_group_id(&self, name: &str) -> Option<ChannelGroupId> {
        self.channel_groups
            .names
            .iter()
            .rev()
            .find(|(_, candidate)| candidate.as_str() == name)
            .map(|(id, _)| *id)
    }

    /// Returns the name of channel group `id`.
    #[must_use]
    pub fn channel_group_name(&self, id: ChannelGroupId) -> Option<&str> {
        self.channel_groups.names.get(&id).map(String::as_str)
    }
}
