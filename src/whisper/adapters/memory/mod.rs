//! In-memory adapters for deterministic sessions in tests and local tooling.

mod directory;

pub use directory::{InMemorySessionDirectory, SessionCall, SessionClient};
