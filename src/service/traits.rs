// Collaborator contracts for the launch service.
// The service only ever sees these two traits; concrete stores and clients plug in behind them.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{NetworkError, StorageError};
use crate::model::LaunchRecord;

/// Remote provider of the complete launch collection.
#[async_trait]
pub trait LaunchSource: Send + Sync {
    /// Fetch every launch the remote system currently knows about.
    async fn fetch_all(&self) -> Result<Vec<LaunchRecord>, NetworkError>;
}

/// Local persistent collection of launches, replaced as a whole.
///
/// Implementations must allow concurrent readers and serialize writers.
#[async_trait]
pub trait LaunchStore: Send + Sync {
    /// Read the stored collection. Empty when nothing has been stored.
    async fn read_all(&self) -> Result<Vec<LaunchRecord>, StorageError>;

    /// Discard the stored collection and store `records` in its place.
    ///
    /// Either the whole replacement happens or, on error, the previous
    /// collection is left intact.
    async fn replace_all(&self, records: &[LaunchRecord]) -> Result<(), StorageError>;
}

#[async_trait]
impl<T: LaunchSource + ?Sized> LaunchSource for Arc<T> {
    async fn fetch_all(&self) -> Result<Vec<LaunchRecord>, NetworkError> {
        (**self).fetch_all().await
    }
}

#[async_trait]
impl<T: LaunchStore + ?Sized> LaunchStore for Arc<T> {
    async fn read_all(&self) -> Result<Vec<LaunchRecord>, StorageError> {
        (**self).read_all().await
    }

    async fn replace_all(&self, records: &[LaunchRecord]) -> Result<(), StorageError> {
        (**self).replace_all(records).await
    }
}
