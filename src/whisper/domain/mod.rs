//! Domain model for group whisper targeting.
//!
//! The whisper domain models session identifiers, the target-mode and
//! whisper-type selectors, resolved target sets, and the wire shape of the
//! set-whisper-list request. Session access remains outside this boundary.

mod channel_path;
mod error;
mod ids;
mod membership;
mod mode;
mod request;
mod server_groups;
mod state;
mod targets;
mod wire;

pub use channel_path::{ChannelPath, DEFAULT_PATH_DELIMITER};
pub use error::{ParseTargetModeError, ParseWhisperTypeError, WhisperDomainError};
pub use ids::{ChannelGroupId, ChannelId, ClientId, GroupArgument, ServerGroupId};
pub use membership::MembershipFilter;
pub use mode::{TargetMode, WhisperType};
pub use request::{ResolutionRequest, ReturnCode};
pub use server_groups::ServerGroupSet;
pub use state::WhisperListState;
pub use targets::{ChannelScope, WhisperTargets};
pub(crate) use targets::unique_in_order;
pub use wire::{SentinelId, TerminatedIds, WhisperListRequest};
