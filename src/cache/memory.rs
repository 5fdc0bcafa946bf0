// In-memory launch store.
// Used for runs that should not touch disk, and as a stand-in store in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::model::LaunchRecord;
use crate::service::LaunchStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    launches: RwLock<Vec<LaunchRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_launches(launches: Vec<LaunchRecord>) -> Self {
        Self {
            launches: RwLock::new(launches),
        }
    }
}

#[async_trait]
impl LaunchStore for MemoryStore {
    async fn read_all(&self) -> Result<Vec<LaunchRecord>, StorageError> {
        Ok(self.launches.read().await.clone())
    }

    async fn replace_all(&self, records: &[LaunchRecord]) -> Result<(), StorageError> {
        *self.launches.write().await = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LaunchOutcome;
    use chrono::{TimeZone, Utc};

    fn launch(name: &str) -> LaunchRecord {
        let date = Utc.with_ymd_and_hms(2006, 3, 24, 22, 30, 0).unwrap();
        LaunchRecord::new(1, name, date, LaunchOutcome::Unknown)
    }

    #[tokio::test]
    async fn test_starts_empty() {
        assert!(MemoryStore::new().read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_all() {
        let store = MemoryStore::with_launches(vec![launch("old")]);
        store.replace_all(&[launch("new")]).await.unwrap();
        assert_eq!(store.read_all().await.unwrap(), vec![launch("new")]);
    }
}
