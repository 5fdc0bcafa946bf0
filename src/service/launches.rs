// Launch data service.
// Decides per call whether to answer from the local store or refresh from the remote source.

use std::fmt;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::model::LaunchRecord;

use super::traits::{LaunchSource, LaunchStore};

/// Why a call went to the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefreshReason {
    /// The caller asked for fresh data.
    Forced,
    /// Nothing was cached.
    EmptyCache,
}

impl fmt::Display for RefreshReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshReason::Forced => write!(f, "forced"),
            RefreshReason::EmptyCache => write!(f, "empty cache"),
        }
    }
}

/// Serves launches from a [`LaunchStore`], refreshing it from a
/// [`LaunchSource`] when the store is empty or a reload is forced.
///
/// Holds no launch data itself. Refreshes are single-flight: concurrent
/// refreshes run one after another, so each store replacement corresponds to
/// exactly one completed fetch and the last one to finish wins.
pub struct LaunchService<S, R> {
    source: S,
    store: R,
    refresh_lock: Mutex<()>,
}

impl<S: LaunchSource, R: LaunchStore> LaunchService<S, R> {
    pub fn new(source: S, store: R) -> Self {
        Self {
            source,
            store,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Get the launch list.
    ///
    /// Returns the stored collection when it is non-empty and `force_reload`
    /// is false. Otherwise fetches the full collection, replaces the store
    /// with it and returns it. A failed fetch leaves the store untouched.
    pub async fn get_launches(&self, force_reload: bool) -> Result<Vec<LaunchRecord>> {
        let cached = self.store.read_all().await?;

        if !cached.is_empty() && !force_reload {
            debug!(count = cached.len(), "serving launches from cache");
            return Ok(cached);
        }

        let reason = if force_reload {
            RefreshReason::Forced
        } else {
            RefreshReason::EmptyCache
        };
        self.refresh_with(reason).await
    }

    /// Fetch fresh launches and replace the store. Same as `get_launches(true)`.
    pub async fn refresh(&self) -> Result<Vec<LaunchRecord>> {
        self.get_launches(true).await
    }

    /// Read the store without ever touching the network.
    pub async fn cached(&self) -> Result<Vec<LaunchRecord>> {
        Ok(self.store.read_all().await?)
    }

    async fn refresh_with(&self, reason: RefreshReason) -> Result<Vec<LaunchRecord>> {
        let _guard = match self.refresh_lock.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                debug!(%reason, "waiting for in-flight refresh");
                let guard = self.refresh_lock.lock().await;

                // The refresh we waited on may already have filled the store.
                if reason == RefreshReason::EmptyCache {
                    let cached = self.store.read_all().await?;
                    if !cached.is_empty() {
                        debug!(count = cached.len(), "store filled by concurrent refresh");
                        return Ok(cached);
                    }
                }
                guard
            }
        };

        info!(%reason, "refreshing launches from remote source");
        let launches = match self.source.fetch_all().await {
            Ok(launches) => launches,
            Err(e) => {
                warn!(%reason, error = %e, "launch fetch failed, cache left unchanged");
                return Err(e.into());
            }
        };

        self.store.replace_all(&launches).await?;
        info!(count = launches.len(), "launch cache replaced");

        Ok(launches)
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &R {
        &self.store
    }
}
