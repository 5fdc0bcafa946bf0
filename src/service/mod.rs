// Launch service module.
// The cache-or-refresh decision and the collaborator traits it is built on.

pub mod launches;
pub mod traits;

pub use launches::LaunchService;
pub use traits::{LaunchSource, LaunchStore};
