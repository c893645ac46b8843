//! Group whisper target resolution and submission.
//!
//! Given a target mode (which part of the channel tree to address) and a
//! whisper type (which members of that scope to keep), this module computes
//! the whisper list and drives the set-whisper-list request against the
//! remote session. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
