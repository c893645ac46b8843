//! In-memory session directory.

use crate::whisper::{
    domain::{
        ChannelGroupId, ChannelId, ChannelPath, ClientId, ReturnCode, ServerGroupSet,
        WhisperListRequest,
    },
    ports::{SessionDirectory, SessionDirectoryError, SessionDirectoryResult},
};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Attributes of a client known to the in-memory session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClient {
    id: ClientId,
    channel: ChannelId,
    display_name: String,
    server_groups: ServerGroupSet,
    channel_group: ChannelGroupId,
    channel_commander: bool,
}

impl SessionClient {
    /// Creates a client sitting in `channel` with no groups.
    #[must_use]
    pub fn new(id: ClientId, channel: ChannelId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            channel,
            display_name: display_name.into(),
            server_groups: ServerGroupSet::new(),
            channel_group: ChannelGroupId::new(0),
            channel_commander: false,
        }
    }

    /// Sets the server groups.
    #[must_use]
    pub fn with_server_groups(mut self, server_groups: ServerGroupSet) -> Self {
        self.server_groups = server_groups;
        self
    }

    /// Sets the channel group.
    #[must_use]
    pub const fn with_channel_group(mut self, channel_group: ChannelGroupId) -> Self {
        self.channel_group = channel_group;
        self
    }

    /// Flags the client as channel commander.
    #[must_use]
    pub const fn with_channel_commander(mut self, channel_commander: bool) -> Self {
        self.channel_commander = channel_commander;
        self
    }

    /// Returns the client id.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }
}

/// Call kinds whose failure can be injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionCall {
    /// [`SessionDirectory::own_client_id`].
    OwnClientId,
    /// [`SessionDirectory::client_list`].
    ClientList,
    /// [`SessionDirectory::channel_list`].
    ChannelList,
    /// [`SessionDirectory::parent_channel_of`] for one channel.
    ParentChannelOf(ChannelId),
    /// [`SessionDirectory::channel_client_list`] for one channel.
    ChannelClientList(ChannelId),
    /// [`SessionDirectory::channel_of_client`] for one client.
    ChannelOfClient(ClientId),
    /// [`SessionDirectory::client_server_groups`] for one client.
    ClientServerGroups(ClientId),
    /// [`SessionDirectory::client_channel_group`] for one client.
    ClientChannelGroup(ClientId),
    /// [`SessionDirectory::is_channel_commander`] for one client.
    IsChannelCommander(ClientId),
    /// [`SessionDirectory::client_display_name`] for one client.
    ClientDisplayName(ClientId),
    /// [`SessionDirectory::channel_name`] for one channel.
    ChannelName(ChannelId),
    /// [`SessionDirectory::channel_id_from_path`].
    ChannelIdFromPath,
    /// [`SessionDirectory::request_set_whisper_list`].
    SetWhisperList,
    /// [`SessionDirectory::request_client_variables`].
    ClientVariables,
}

/// Thread-safe in-memory model of a voice session.
///
/// Channels are kept in insertion order, clients in id order. Every call is
/// recorded so tests can assert on query volume and request order.
#[derive(Debug, Clone)]
pub struct InMemorySessionDirectory {
    state: Arc<RwLock<InMemorySessionState>>,
}

#[derive(Debug)]
struct InMemorySessionState {
    own_client: ClientId,
    channels: Vec<(ChannelId, ChannelId, String)>,
    clients: BTreeMap<ClientId, SessionClient>,
    failures: HashMap<SessionCall, u32>,
    calls: Vec<SessionCall>,
    whisper_lists: Vec<WhisperListRequest>,
    variable_refreshes: Vec<(ClientId, Option<ReturnCode>)>,
}

impl InMemorySessionDirectory {
    /// Creates a session whose own client is `own_client`.
    #[must_use]
    pub fn new(own_client: ClientId) -> Self {
        let state = InMemorySessionState {
            own_client,
            channels: Vec::new(),
            clients: BTreeMap::new(),
            failures: HashMap::new(),
            calls: Vec::new(),
            whisper_lists: Vec::new(),
            variable_refreshes: Vec::new(),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    fn read(&self) -> SessionDirectoryResult<RwLockReadGuard<'_, InMemorySessionState>> {
        self.state.read().map_err(|err| {
            SessionDirectoryError::unavailable(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> SessionDirectoryResult<RwLockWriteGuard<'_, InMemorySessionState>> {
        self.state.write().map_err(|err| {
            SessionDirectoryError::unavailable(std::io::Error::other(err.to_string()))
        })
    }

    /// Adds a channel under `parent` ([`ChannelId::ROOT`] for top level).
    ///
    /// # Errors
    ///
    /// Returns [`SessionDirectoryError::Unavailable`] when lock acquisition
    /// fails.
    pub fn add_channel(
        &self,
        channel: ChannelId,
        parent: ChannelId,
        name: impl Into<String>,
    ) -> SessionDirectoryResult<()> {
        let mut state = self.write()?;
        state.channels.retain(|(id, _, _)| *id != channel);
        state.channels.push((channel, parent, name.into()));
        Ok(())
    }

    /// Adds or replaces a client.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDirectoryError::Unavailable`] when lock acquisition
    /// fails.
    pub fn add_client(&self, client: SessionClient) -> SessionDirectoryResult<()> {
        let mut state = self.write()?;
        state.clients.insert(client.id(), client);
        Ok(())
    }

    /// Makes every subsequent `call` fail with the remote error `code`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDirectoryError::Unavailable`] when lock acquisition
    /// fails.
    pub fn fail_call(&self, call: SessionCall, code: u32) -> SessionDirectoryResult<()> {
        let mut state = self.write()?;
        state.failures.insert(call, code);
        Ok(())
    }

    /// Returns every call made so far, in order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDirectoryError::Unavailable`] when lock acquisition
    /// fails.
    pub fn calls(&self) -> SessionDirectoryResult<Vec<SessionCall>> {
        Ok(self.read()?.calls.clone())
    }

    /// Returns the accepted set-whisper-list requests.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDirectoryError::Unavailable`] when lock acquisition
    /// fails.
    pub fn whisper_lists(&self) -> SessionDirectoryResult<Vec<WhisperListRequest>> {
        Ok(self.read()?.whisper_lists.clone())
    }

    /// Returns the accepted client variable refreshes.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDirectoryError::Unavailable`] when lock acquisition
    /// fails.
    pub fn variable_refreshes(
        &self,
    ) -> SessionDirectoryResult<Vec<(ClientId, Option<ReturnCode>)>> {
        Ok(self.read()?.variable_refreshes.clone())
    }

    fn record(
        &self,
        call: SessionCall,
    ) -> SessionDirectoryResult<RwLockWriteGuard<'_, InMemorySessionState>> {
        let mut state = self.write()?;
        state.calls.push(call);
        if let Some(code) = state.failures.get(&call) {
            return Err(SessionDirectoryError::remote(*code));
        }
        Ok(state)
    }

    fn client<T>(
        &self,
        call: SessionCall,
        client: ClientId,
        read: impl FnOnce(&SessionClient) -> T,
    ) -> SessionDirectoryResult<T> {
        let state = self.record(call)?;
        state
            .clients
            .get(&client)
            .map(read)
            .ok_or(SessionDirectoryError::remote(INVALID_CLIENT_ID))
    }
}

/// Code the session reports for an unknown client id.
const INVALID_CLIENT_ID: u32 = 0x0200;

/// Code the session reports for an unknown channel id.
const INVALID_CHANNEL_ID: u32 = 0x0300;

#[async_trait]
impl SessionDirectory for InMemorySessionDirectory {
    async fn own_client_id(&self) -> SessionDirectoryResult<ClientId> {
        Ok(self.record(SessionCall::OwnClientId)?.own_client)
    }

    async fn client_list(&self) -> SessionDirectoryResult<Vec<ClientId>> {
        let state = self.record(SessionCall::ClientList)?;
        Ok(state.clients.keys().copied().collect())
    }

    async fn channel_list(&self) -> SessionDirectoryResult<Vec<ChannelId>> {
        let state = self.record(SessionCall::ChannelList)?;
        Ok(state.channels.iter().map(|(id, _, _)| *id).collect())
    }

    async fn parent_channel_of(&self, channel: ChannelId) -> SessionDirectoryResult<ChannelId> {
        let state = self.record(SessionCall::ParentChannelOf(channel))?;
        state
            .channels
            .iter()
            .find(|(id, _, _)| *id == channel)
            .map(|(_, parent, _)| *parent)
            .ok_or(SessionDirectoryError::remote(INVALID_CHANNEL_ID))
    }

    async fn channel_client_list(
        &self,
        channel: ChannelId,
    ) -> SessionDirectoryResult<Vec<ClientId>> {
        let state = self.record(SessionCall::ChannelClientList(channel))?;
        if !state.channels.iter().any(|(id, _, _)| *id == channel) {
            return Err(SessionDirectoryError::remote(INVALID_CHANNEL_ID));
        }
        Ok(state
            .clients
            .values()
            .filter(|client| client.channel == channel)
            .map(SessionClient::id)
            .collect())
    }

    async fn channel_of_client(&self, client: ClientId) -> SessionDirectoryResult<ChannelId> {
        self.client(SessionCall::ChannelOfClient(client), client, |c| c.channel)
    }

    async fn client_server_groups(
        &self,
        client: ClientId,
    ) -> SessionDirectoryResult<ServerGroupSet> {
        self.client(SessionCall::ClientServerGroups(client), client, |c| {
            c.server_groups.clone()
        })
    }

    async fn client_channel_group(
        &self,
        client: ClientId,
    ) -> SessionDirectoryResult<ChannelGroupId> {
        self.client(SessionCall::ClientChannelGroup(client), client, |c| {
            c.channel_group
        })
    }

    async fn is_channel_commander(&self, client: ClientId) -> SessionDirectoryResult<bool> {
        self.client(SessionCall::IsChannelCommander(client), client, |c| {
            c.channel_commander
        })
    }

    async fn client_display_name(&self, client: ClientId) -> SessionDirectoryResult<String> {
        self.client(SessionCall::ClientDisplayName(client), client, |c| {
            c.display_name.clone()
        })
    }

    async fn channel_name(&self, channel: ChannelId) -> SessionDirectoryResult<String> {
        let state = self.record(SessionCall::ChannelName(channel))?;
        state
            .channels
            .iter()
            .find(|(id, _, _)| *id == channel)
            .map(|(_, _, name)| name.clone())
            .ok_or(SessionDirectoryError::remote(INVALID_CHANNEL_ID))
    }

    async fn channel_id_from_path(&self, path: &ChannelPath) -> SessionDirectoryResult<ChannelId> {
        let state = self.record(SessionCall::ChannelIdFromPath)?;
        let mut parent = ChannelId::ROOT;
        for name in path.names() {
            let Some((id, _, _)) = state
                .channels
                .iter()
                .find(|(_, candidate_parent, candidate_name)| {
                    *candidate_parent == parent && candidate_name == name
                })
            else {
                return Ok(ChannelId::ROOT);
            };
            parent = *id;
        }
        Ok(parent)
    }

    async fn request_set_whisper_list(
        &self,
        request: &WhisperListRequest,
    ) -> SessionDirectoryResult<()> {
        let mut state = self.record(SessionCall::SetWhisperList)?;
        state.whisper_lists.push(request.clone());
        Ok(())
    }

    async fn request_client_variables(
        &self,
        caller: ClientId,
        return_code: Option<ReturnCode>,
    ) -> SessionDirectoryResult<()> {
        let mut state = self.record(SessionCall::ClientVariables)?;
        state.variable_refreshes.push((caller, return_code));
        Ok(())
    }
}
