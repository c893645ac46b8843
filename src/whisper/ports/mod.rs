//! Port contracts for whisper target resolution.

mod directory;

#[cfg(test)]
pub(crate) use directory::MockSessionDirectory;
pub use directory::{
    RemoteErrorCode, SessionDirectory, SessionDirectoryError, SessionDirectoryResult,
};
