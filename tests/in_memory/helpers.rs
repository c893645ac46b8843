//! Shared fixtures for in-memory session integration tests.

use groupwhisper::whisper::{
    adapters::memory::{InMemorySessionDirectory, SessionClient},
    domain::{ChannelGroupId, ChannelId, ClientId, ServerGroupSet},
    services::WhisperRequestDriver,
};
use rstest::fixture;
use std::sync::Arc;

/// Client issuing every whisper request.
pub const CALLER: ClientId = ClientId::new(1);

/// Top-level channel.
pub const LOBBY: ChannelId = ChannelId::new(1);
/// Child of the lobby.
pub const OPS: ChannelId = ChannelId::new(2);
/// Child of ops; the caller sits here.
pub const SQUAD: ChannelId = ChannelId::new(3);
/// First subchannel of the squad.
pub const ALPHA: ChannelId = ChannelId::new(4);
/// Second subchannel of the squad.
pub const BRAVO: ChannelId = ChannelId::new(5);
/// Grandchild of the squad, under alpha.
pub const DEEP: ChannelId = ChannelId::new(6);

/// Driver and the session it talks to.
pub struct Session {
    /// Session handle for setup and call assertions.
    pub directory: Arc<InMemorySessionDirectory>,
    /// Driver under test.
    pub driver: WhisperRequestDriver<InMemorySessionDirectory>,
}

/// Shorthand for a client id.
#[must_use]
pub const fn client(value: u16) -> ClientId {
    ClientId::new(value)
}

fn groups(raw: &str) -> ServerGroupSet {
    ServerGroupSet::parse(raw).expect("valid server group list")
}

/// Lobby -> Ops -> Squad (caller) -> {Alpha -> Deep, Bravo}.
///
/// | client | channel | channel group | server groups | commander |
/// |--------|---------|---------------|---------------|-----------|
/// | 1      | Squad   | 7             |               |           |
/// | 2      | Squad   | 7             | 6             |           |
/// | 3      | Squad   | 9             |               | yes       |
/// | 4      | Alpha   | 7             | 6,8           |           |
/// | 5      | Lobby   | 9             | 8             | yes       |
/// | 6      | Squad   | 7             |               |           |
/// | 7      | Deep    | 7             |               |           |
#[fixture]
pub fn session() -> Session {
    let directory = Arc::new(InMemorySessionDirectory::new(CALLER));
    for (channel, parent, name) in [
        (LOBBY, ChannelId::ROOT, "Lobby"),
        (OPS, LOBBY, "Ops"),
        (SQUAD, OPS, "Squad"),
        (ALPHA, SQUAD, "Alpha"),
        (BRAVO, SQUAD, "Bravo"),
        (DEEP, ALPHA, "Deep"),
    ] {
        directory
            .add_channel(channel, parent, name)
            .expect("channel setup should succeed");
    }
    let clients = [
        SessionClient::new(CALLER, SQUAD, "caller").with_channel_group(ChannelGroupId::new(7)),
        SessionClient::new(client(2), SQUAD, "alice")
            .with_channel_group(ChannelGroupId::new(7))
            .with_server_groups(groups("6")),
        SessionClient::new(client(3), SQUAD, "bob")
            .with_channel_group(ChannelGroupId::new(9))
            .with_channel_commander(true),
        SessionClient::new(client(4), ALPHA, "carol")
            .with_channel_group(ChannelGroupId::new(7))
            .with_server_groups(groups("6,8")),
        SessionClient::new(client(5), LOBBY, "dave")
            .with_channel_group(ChannelGroupId::new(9))
            .with_server_groups(groups("8"))
            .with_channel_commander(true),
        SessionClient::new(client(6), SQUAD, "erin").with_channel_group(ChannelGroupId::new(7)),
        SessionClient::new(client(7), DEEP, "frank").with_channel_group(ChannelGroupId::new(7)),
    ];
    for session_client in clients {
        directory
            .add_client(session_client)
            .expect("client setup should succeed");
    }
    Session {
        driver: WhisperRequestDriver::new(directory.clone()),
        directory,
    }
}

/// Converts raw ids for comparison with resolved clients.
#[must_use]
pub fn clients(values: &[u16]) -> Vec<ClientId> {
    values.iter().copied().map(ClientId::new).collect()
}
