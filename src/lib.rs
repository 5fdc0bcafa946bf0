//! Cached SpaceX launch list.
//!
//! Serves launch records from a local store and refreshes that store from the
//! SpaceX API when it is empty or when the caller forces a reload.

pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod spacex;

pub use error::{Error, NetworkError, Result, StorageError};
pub use model::{LaunchOutcome, LaunchRecord, Links, Patch};
pub use service::{LaunchService, LaunchSource, LaunchStore};
