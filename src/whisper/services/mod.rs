//! Application services for whisper target resolution and submission.

mod driver;
mod error;
mod filter;
mod resolver;
mod settings;
mod tree;

pub use driver::{WhisperOutcome, WhisperRequestDriver, WhisperSubmission};
pub use error::{WhisperError, WhisperResult};
pub use filter::TypeFilter;
pub use resolver::TargetModeResolver;
pub use settings::WhisperSettings;
pub use tree::ChannelTreeWalker;
