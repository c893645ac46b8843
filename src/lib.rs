//! Groupwhisper: group whisper targeting for voice-chat client sessions.
//!
//! This crate resolves a requested whisper scope (which channels or clients
//! should receive a private broadcast) into a concrete, deduplicated target
//! set and submits it to the remote voice session, including the follow-up
//! request the platform needs before it delivers completion notifications
//! for tokenised whisper-list requests.
//!
//! # Architecture
//!
//! Groupwhisper follows hexagonal architecture principles:
//!
//! - **Domain**: Pure targeting logic with no session dependencies
//! - **Ports**: Abstract trait interfaces for the remote voice session
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`whisper`]: Target-mode resolution, membership filtering, and submission
//! - [`server_info`]: Server group and channel group name caches

pub mod server_info;
pub mod whisper;
