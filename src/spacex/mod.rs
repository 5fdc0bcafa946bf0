// SpaceX API module.
// Provides the client and wire types for the public SpaceX REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::SpaceXClient;
pub use types::{ApiLaunch, decode_launches};
