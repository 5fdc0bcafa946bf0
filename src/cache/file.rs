// File-backed launch store.
// Keeps the whole launch list in one JSON document and swaps it atomically on refresh.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StorageError;
use crate::model::LaunchRecord;
use crate::service::LaunchStore;

use super::paths;
use super::store::{self, CachedData};

/// Launch store persisted as `launches.json`.
pub struct FileStore {
    path: PathBuf,
    /// Readers share, writers are exclusive.
    lock: RwLock<()>,
}

impl FileStore {
    /// Store backed by the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Store backed by `launches.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(paths::launches_path(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the stored collection was last replaced, if ever.
    pub async fn cached_at(&self) -> Result<Option<DateTime<Utc>>, StorageError> {
        let _guard = self.lock.read().await;
        let cached: Option<CachedData<Vec<LaunchRecord>>> = store::read_cached(&self.path).await?;
        Ok(cached.map(|c| c.cached_at))
    }

    /// Remove the cache document entirely.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.lock.write().await;
        store::delete(&self.path).await
    }
}

#[async_trait]
impl LaunchStore for FileStore {
    async fn read_all(&self) -> Result<Vec<LaunchRecord>, StorageError> {
        let _guard = self.lock.read().await;
        let cached: Option<CachedData<Vec<LaunchRecord>>> = store::read_cached(&self.path).await?;

        match cached {
            Some(cached) => {
                debug!(
                    path = %self.path.display(),
                    count = cached.data.len(),
                    cached_at = %cached.cached_at,
                    "read launch cache"
                );
                Ok(cached.data)
            }
            None => Ok(Vec::new()),
        }
    }

    async fn replace_all(&self, records: &[LaunchRecord]) -> Result<(), StorageError> {
        let _guard = self.lock.write().await;
        store::write_cached(&self.path, &records).await?;
        debug!(path = %self.path.display(), count = records.len(), "replaced launch cache");
        Ok(())
    }
}
