//! Domain types for the `server_info` context.

mod error;
mod group_cache;
mod group_type;

pub use error::ParseGroupDbTypeError;
pub use group_cache::GroupNameCache;
pub use group_type::GroupDbType;
