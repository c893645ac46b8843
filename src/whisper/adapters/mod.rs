//! Adapter implementations for whisper ports.

pub mod memory;
