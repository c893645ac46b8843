//! Server group and channel group name caches.
//!
//! The host announces group listings one entry at a time, followed by a
//! finished event. This context keeps the most recent complete listing so
//! callers can translate between group names and the ids a whisper request
//! takes as its group argument.

pub mod domain;
