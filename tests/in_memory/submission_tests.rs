//! Submission behaviour against the in-memory session.

use super::helpers::{ALPHA, BRAVO, CALLER, Session, client, session};
use groupwhisper::whisper::{
    adapters::memory::SessionCall,
    domain::{
        ChannelId, ClientId, ResolutionRequest, ReturnCode, TargetMode, WhisperListState,
        WhisperType,
    },
    services::WhisperError,
};
use rstest::rstest;

fn return_code(value: &str) -> ReturnCode {
    ReturnCode::new(value).expect("non-empty return code")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn channel_targets_are_sentinel_terminated(session: Session) {
    let request = ResolutionRequest::new(TargetMode::SubChannels, WhisperType::AllClients);

    session
        .driver
        .set_whisper_list(&request)
        .await
        .expect("submission should succeed");

    let lists = session.directory.whisper_lists().expect("lists");
    let [submitted] = lists.as_slice() else {
        panic!("expected exactly one whisper list, got {}", lists.len());
    };
    assert_eq!(submitted.caller(), CALLER);
    assert_eq!(
        submitted.channels().map(|ids| ids.as_terminated().to_vec()),
        Some(vec![ALPHA, BRAVO, ChannelId::ROOT])
    );
    assert!(submitted.clients().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn client_targets_are_sentinel_terminated(session: Session) {
    let request = ResolutionRequest::new(TargetMode::All, WhisperType::ServerGroup)
        .with_group_argument(6);

    session
        .driver
        .set_whisper_list(&request)
        .await
        .expect("submission should succeed");

    let lists = session.directory.whisper_lists().expect("lists");
    let submitted = lists.first().expect("one whisper list");
    assert!(submitted.channels().is_none());
    assert_eq!(
        submitted.clients().map(|ids| ids.as_terminated().to_vec()),
        Some(vec![client(2), client(4), ClientId::new(0)])
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_resolution_sends_nothing(session: Session) {
    let request = ResolutionRequest::new(TargetMode::AncestorChannelFamily, WhisperType::AllClients)
        .with_return_code(return_code("ptt"));

    let outcome = session
        .driver
        .set_whisper_list(&request)
        .await
        .expect("no-op is not an error");

    assert!(outcome.is_noop());
    let calls = session.directory.calls().expect("calls");
    assert!(!calls.contains(&SessionCall::SetWhisperList));
    assert!(!calls.contains(&SessionCall::ClientVariables));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filter_matching_nobody_is_a_no_op(session: Session) {
    let request = ResolutionRequest::new(TargetMode::SubChannels, WhisperType::ChannelCommander);

    let outcome = session
        .driver
        .set_whisper_list(&request)
        .await
        .expect("no-op is not an error");

    assert!(outcome.is_noop());
    assert!(session.directory.whisper_lists().expect("lists").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn query_failure_submits_nothing(session: Session) {
    session
        .directory
        .fail_call(SessionCall::ChannelList, 0x0500)
        .expect("failure setup");
    let request = ResolutionRequest::new(TargetMode::SubChannels, WhisperType::AllClients);

    let result = session.driver.set_whisper_list(&request).await;

    assert!(matches!(result, Err(WhisperError::Query(_))));
    assert!(session.directory.whisper_lists().expect("lists").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tokenised_request_refreshes_caller_variables_after_submit(session: Session) {
    let request = ResolutionRequest::new(TargetMode::CurrentChannel, WhisperType::AllClients)
        .with_return_code(return_code("ptt-1"));

    let outcome = session
        .driver
        .set_whisper_list(&request)
        .await
        .expect("submission should succeed");

    let calls = session.directory.calls().expect("calls");
    let submit = calls
        .iter()
        .position(|call| *call == SessionCall::SetWhisperList)
        .expect("whisper list submitted");
    let refresh = calls
        .iter()
        .position(|call| *call == SessionCall::ClientVariables)
        .expect("client variables refreshed");
    assert!(submit < refresh);
    assert_eq!(
        session.directory.variable_refreshes().expect("refreshes"),
        vec![(CALLER, Some(return_code("ptt-1")))]
    );

    let mut submission = outcome.submission().cloned().expect("submitted");
    assert_eq!(submission.state(), WhisperListState::CompensationSent);
    submission
        .acknowledge(&return_code("ptt-1"))
        .expect("completion should be accepted");
    assert_eq!(submission.state(), WhisperListState::Complete);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn untokenised_request_skips_refresh(session: Session) {
    let request = ResolutionRequest::new(TargetMode::CurrentChannel, WhisperType::AllClients);

    let outcome = session
        .driver
        .set_whisper_list(&request)
        .await
        .expect("submission should succeed");

    assert!(
        session
            .directory
            .variable_refreshes()
            .expect("refreshes")
            .is_empty()
    );
    assert_eq!(
        outcome.submission().map(|submission| submission.state()),
        Some(WhisperListState::Complete)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_submit_is_not_compensated(session: Session) {
    session
        .directory
        .fail_call(SessionCall::SetWhisperList, 0x0a08)
        .expect("failure setup");
    let request = ResolutionRequest::new(TargetMode::CurrentChannel, WhisperType::AllClients)
        .with_return_code(return_code("ptt"));

    let result = session.driver.set_whisper_list(&request).await;

    assert!(matches!(result, Err(WhisperError::SubmitFailed(_))));
    assert!(
        !session
            .directory
            .calls()
            .expect("calls")
            .contains(&SessionCall::ClientVariables)
    );
}
