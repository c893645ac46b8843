//! End-to-end target resolution against the in-memory session.

use super::helpers::{ALPHA, BRAVO, CALLER, LOBBY, OPS, SQUAD, Session, clients, session};
use groupwhisper::{
    server_info::domain::GroupNameCache,
    whisper::{
        adapters::memory::{SessionCall, SessionClient},
        domain::{
            ChannelId, ResolutionRequest, ServerGroupId, TargetMode, WhisperTargets, WhisperType,
        },
        services::WhisperError,
    },
};
use rstest::rstest;

fn request(mode: TargetMode, whisper_type: WhisperType, argument: u64) -> ResolutionRequest {
    ResolutionRequest::new(mode, whisper_type).with_group_argument(argument)
}

async fn submitted_targets(session: &Session, request: &ResolutionRequest) -> WhisperTargets {
    let outcome = session
        .driver
        .set_whisper_list(request)
        .await
        .expect("whisper list should be submitted");
    outcome
        .submission()
        .expect("targets should resolve")
        .targets()
        .clone()
}

#[rstest]
#[case(TargetMode::CurrentChannel, &[SQUAD])]
#[case(TargetMode::ParentChannel, &[OPS])]
#[case(TargetMode::AllParentChannels, &[OPS, LOBBY])]
#[case(TargetMode::ChannelFamily, &[ALPHA, BRAVO, SQUAD])]
#[case(TargetMode::SubChannels, &[ALPHA, BRAVO])]
#[tokio::test(flavor = "multi_thread")]
async fn unfiltered_channel_modes_target_channels(
    session: Session,
    #[case] mode: TargetMode,
    #[case] expected: &[ChannelId],
) {
    let targets = submitted_targets(&session, &request(mode, WhisperType::AllClients, 0)).await;

    assert_eq!(targets, WhisperTargets::Channels(expected.to_vec()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn all_mode_targets_everyone_but_the_caller(session: Session) {
    let targets = submitted_targets(
        &session,
        &request(TargetMode::All, WhisperType::AllClients, 0),
    )
    .await;

    assert_eq!(targets, WhisperTargets::Clients(clients(&[2, 3, 4, 5, 6, 7])));
    assert!(!targets.client_ids().contains(&CALLER));
}

#[rstest]
#[case(TargetMode::All, WhisperType::ServerGroup, 6, &[2, 4])]
#[case(TargetMode::All, WhisperType::ServerGroup, 8, &[4, 5])]
#[case(TargetMode::All, WhisperType::ChannelCommander, 0, &[3, 5])]
#[case(TargetMode::CurrentChannel, WhisperType::ChannelGroup, 0, &[2, 6])]
#[case(TargetMode::CurrentChannel, WhisperType::ChannelGroup, 9, &[3])]
#[case(TargetMode::ChannelFamily, WhisperType::ChannelGroup, 7, &[4, 2, 6])]
#[case(TargetMode::AllParentChannels, WhisperType::ChannelCommander, 0, &[5])]
#[tokio::test(flavor = "multi_thread")]
async fn filtered_modes_target_matching_clients(
    session: Session,
    #[case] mode: TargetMode,
    #[case] whisper_type: WhisperType,
    #[case] argument: u64,
    #[case] expected: &[u16],
) {
    let targets = submitted_targets(&session, &request(mode, whisper_type, argument)).await;

    assert_eq!(targets, WhisperTargets::Clients(clients(expected)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sub_channels_exclude_grandchildren(session: Session) {
    let targets = submitted_targets(
        &session,
        &request(TargetMode::SubChannels, WhisperType::ChannelGroup, 7),
    )
    .await;

    assert_eq!(targets, WhisperTargets::Clients(clients(&[4])));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filtered_channel_scope_lists_members_per_channel(session: Session) {
    submitted_targets(
        &session,
        &request(TargetMode::ChannelFamily, WhisperType::ChannelCommander, 0),
    )
    .await;

    let calls = session.directory.calls().expect("calls");
    let listed: Vec<SessionCall> = calls
        .into_iter()
        .filter(|call| matches!(call, SessionCall::ChannelClientList(_)))
        .collect();
    assert_eq!(
        listed,
        vec![
            SessionCall::ChannelClientList(ALPHA),
            SessionCall::ChannelClientList(BRAVO),
            SessionCall::ChannelClientList(SQUAD),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parent_of_top_level_channel_is_an_error(session: Session) {
    session
        .directory
        .add_client(SessionClient::new(CALLER, LOBBY, "caller"))
        .expect("client move should succeed");

    let result = session
        .driver
        .set_whisper_list(&request(TargetMode::ParentChannel, WhisperType::AllClients, 0))
        .await;

    assert!(matches!(result, Err(WhisperError::NoParentChannel(channel)) if channel == LOBBY));
    assert!(session.directory.whisper_lists().expect("lists").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cached_group_name_selects_server_group(session: Session) {
    let mut cache = GroupNameCache::new();
    cache.on_server_group_listed(ServerGroupId::new(6), "Medic");
    cache.on_server_group_listed(ServerGroupId::new(8), "Pilot");
    cache.finish_server_group_list();
    let pilots = cache.server_group_id("Pilot").expect("group is cached");

    let targets = submitted_targets(
        &session,
        &request(TargetMode::All, WhisperType::ServerGroup, pilots.value()),
    )
    .await;

    assert_eq!(targets, WhisperTargets::Clients(clients(&[4, 5])));
}
