//! Whisper-list submission.
//!
//! The driver runs resolution and filtering, submits the resulting list,
//! and, when the request carries a return code, follows up with a refresh
//! of the caller's own client variables under the same code. The session
//! never notifies completion of a tokenised set-whisper-list request; the
//! refresh's notification is the one callers wait for.

use super::{
    ChannelTreeWalker, TargetModeResolver, TypeFilter, WhisperError, WhisperResult,
    WhisperSettings,
};
use crate::whisper::{
    domain::{
        ChannelScope, ClientId, MembershipFilter, ResolutionRequest, ReturnCode, TargetMode,
        WhisperDomainError, WhisperListRequest, WhisperListState, WhisperTargets,
    },
    ports::{SessionDirectory, SessionDirectoryError},
};
use std::sync::Arc;
use tracing::{Level, debug, enabled, error, warn};

/// Result of a whisper-list invocation.
#[derive(Debug, Clone)]
pub enum WhisperOutcome {
    /// Nothing resolved; no request was sent.
    NoOp,
    /// The whisper list was accepted by the session.
    Submitted(WhisperSubmission),
}

impl WhisperOutcome {
    /// Returns `true` for [`WhisperOutcome::NoOp`].
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// Returns the submission, if one was made.
    #[must_use]
    pub const fn submission(&self) -> Option<&WhisperSubmission> {
        match self {
            Self::NoOp => None,
            Self::Submitted(submission) => Some(submission),
        }
    }
}

/// An accepted whisper list and the progress of its completion protocol.
#[derive(Debug, Clone)]
pub struct WhisperSubmission {
    targets: WhisperTargets,
    return_code: Option<ReturnCode>,
    state: WhisperListState,
    compensation_error: Option<SessionDirectoryError>,
}

impl WhisperSubmission {
    /// Returns the submitted targets.
    #[must_use]
    pub const fn targets(&self) -> &WhisperTargets {
        &self.targets
    }

    /// Returns the correlation token, if one was supplied.
    #[must_use]
    pub const fn return_code(&self) -> Option<&ReturnCode> {
        self.return_code.as_ref()
    }

    /// Returns the protocol state.
    #[must_use]
    pub const fn state(&self) -> WhisperListState {
        self.state
    }

    /// Reports the outcome of the compensating request.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperError::CompensationFailed`] when the session
    /// rejected it. The whisper list stays active either way.
    pub fn compensation(&self) -> WhisperResult<()> {
        match &self.compensation_error {
            Some(err) => Err(WhisperError::CompensationFailed(err.clone())),
            None => Ok(()),
        }
    }

    /// Records the completion notification for `return_code`.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperDomainError::UnexpectedReturnCode`] when the
    /// notification belongs to another request and
    /// [`WhisperDomainError::InvalidStateTransition`] when the submission is
    /// already complete.
    pub fn acknowledge(&mut self, return_code: &ReturnCode) -> Result<(), WhisperDomainError> {
        if self.return_code.as_ref() != Some(return_code) {
            return Err(WhisperDomainError::UnexpectedReturnCode {
                expected: self
                    .return_code
                    .as_ref()
                    .map(ReturnCode::to_string)
                    .unwrap_or_default(),
                actual: return_code.to_string(),
            });
        }
        self.state = self.state.transition_to(WhisperListState::Complete)?;
        Ok(())
    }
}

/// Resolves, filters, and submits whisper lists for one session.
#[derive(Clone)]
pub struct WhisperRequestDriver<D>
where
    D: SessionDirectory,
{
    directory: Arc<D>,
    resolver: TargetModeResolver<D>,
    filter: TypeFilter<D>,
    settings: WhisperSettings,
}

impl<D> WhisperRequestDriver<D>
where
    D: SessionDirectory,
{
    /// Creates a driver with default settings.
    #[must_use]
    pub fn new(directory: Arc<D>) -> Self {
        let walker = ChannelTreeWalker::new(directory.clone());
        Self::assemble(directory, walker, WhisperSettings::default())
    }

    /// Creates a driver with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperDomainError::EmptyPathDelimiter`] when the settings
    /// carry an empty channel path delimiter.
    pub fn with_settings(
        directory: Arc<D>,
        settings: WhisperSettings,
    ) -> Result<Self, WhisperDomainError> {
        let walker = ChannelTreeWalker::with_settings(directory.clone(), &settings)?;
        Ok(Self::assemble(directory, walker, settings))
    }

    fn assemble(
        directory: Arc<D>,
        walker: ChannelTreeWalker<D>,
        settings: WhisperSettings,
    ) -> Self {
        Self {
            resolver: TargetModeResolver::with_walker(walker),
            filter: TypeFilter::new(directory.clone()),
            directory,
            settings,
        }
    }

    /// Returns the channel tree walker, configured with the driver's
    /// settings.
    #[must_use]
    pub const fn walker(&self) -> &ChannelTreeWalker<D> {
        self.resolver.walker()
    }

    /// Resolves `request` and submits the whisper list.
    ///
    /// Returns [`WhisperOutcome::NoOp`] without contacting the session's
    /// request path when nothing resolves.
    ///
    /// # Errors
    ///
    /// Returns [`WhisperError::Domain`] for a server group request without
    /// group argument, [`WhisperError::Query`] and the walker errors when
    /// resolution fails (nothing is submitted then), and
    /// [`WhisperError::SubmitFailed`] when the session rejects the list.
    /// A failed compensating request is reported through
    /// [`WhisperSubmission::compensation`] instead.
    pub async fn set_whisper_list(
        &self,
        request: &ResolutionRequest,
    ) -> WhisperResult<WhisperOutcome> {
        let membership =
            MembershipFilter::for_type(request.whisper_type(), request.group_argument())
                .inspect_err(|err| error!(error = %err, "no target group specified, aborting"))?;

        let caller = self.directory.own_client_id().await?;
        let targets = self
            .resolve_targets(caller, request.mode(), membership)
            .await
            .inspect_err(|err| {
                error!(error = %err, mode = %request.mode(), "whisper target resolution failed");
            })?;

        if targets.is_empty() {
            debug!(
                mode = %request.mode(),
                whisper_type = %request.whisper_type(),
                "no whisper targets resolved"
            );
            return Ok(WhisperOutcome::NoOp);
        }

        self.log_targets(&targets).await;
        let return_code = request.return_code().cloned();
        let wire = WhisperListRequest::new(caller, &targets, return_code.clone());
        self.directory
            .request_set_whisper_list(&wire)
            .await
            .map_err(WhisperError::SubmitFailed)?;

        let submission = self.compensate(caller, targets, return_code).await;
        Ok(WhisperOutcome::Submitted(submission))
    }

    /// Computes the deduplicated target set without submitting it.
    ///
    /// # Errors
    ///
    /// Same resolution errors as [`Self::set_whisper_list`].
    pub async fn resolve_targets(
        &self,
        caller: ClientId,
        mode: TargetMode,
        membership: MembershipFilter,
    ) -> WhisperResult<WhisperTargets> {
        let scope = self.resolver.resolve(caller, mode).await?;
        let pool = match (scope, membership.is_unfiltered()) {
            (ChannelScope::Channels(channels), true) => {
                return Ok(WhisperTargets::from_channels(channels));
            }
            (ChannelScope::Channels(channels), false) => {
                self.filter.expand_channels(caller, &channels).await?
            }
            (ChannelScope::AllClients, _) => self.directory.client_list().await?,
        };
        let candidates = WhisperTargets::from_clients(pool, caller).client_ids().to_vec();
        let kept = self.filter.apply(caller, candidates, membership).await?;
        Ok(WhisperTargets::from_clients(kept, caller))
    }

    async fn compensate(
        &self,
        caller: ClientId,
        targets: WhisperTargets,
        return_code: Option<ReturnCode>,
    ) -> WhisperSubmission {
        let mut submission = WhisperSubmission {
            targets,
            return_code,
            state: WhisperListState::Submitted,
            compensation_error: None,
        };
        let Some(code) = submission.return_code.clone() else {
            submission.state = WhisperListState::Complete;
            return submission;
        };

        match self
            .directory
            .request_client_variables(caller, Some(code.clone()))
            .await
        {
            Ok(()) => submission.state = WhisperListState::CompensationSent,
            Err(err) => {
                warn!(
                    error = %err,
                    return_code = %code,
                    "compensating client variable request failed"
                );
                submission.compensation_error = Some(err);
            }
        }
        submission
    }

    async fn log_targets(&self, targets: &WhisperTargets) {
        if !enabled!(Level::DEBUG) {
            return;
        }
        debug!("attempting to whisper");
        if let WhisperTargets::Channels(channels) = targets {
            debug!(channels = %join_ids(channels), "whisper channel targets");
        }
        let clients = targets.client_ids();
        if clients.is_empty() {
            return;
        }
        if !self.settings.log_target_names {
            debug!(clients = %join_ids(clients), "whisper client targets");
            return;
        }
        let mut names = Vec::with_capacity(clients.len());
        for client in clients {
            let name = self
                .directory
                .client_display_name(*client)
                .await
                .unwrap_or_else(|_| "(error getting client display name)".to_owned());
            names.push(name);
        }
        debug!(clients = %names.join(" "), "whisper client targets");
    }
}

fn join_ids<T: ToString>(ids: &[T]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
