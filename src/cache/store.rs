// Cache store for reading and writing cached documents.
// Handles JSON serialization and atomic replacement on the filesystem.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tempfile::NamedTempFile;
use tokio::{fs, task};

use crate::error::StorageError;

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }
}

/// Read a cached JSON document. A missing file reads as `None`.
pub async fn read_cached<T: DeserializeOwned>(
    path: &Path,
) -> Result<Option<CachedData<T>>, StorageError> {
    let contents = match fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let cached: CachedData<T> = serde_json::from_str(&contents)?;
    Ok(Some(cached))
}

/// Write data to cache as JSON, replacing any previous document atomically.
///
/// The document is written to a uniquely named temp file in the same
/// directory, synced, then persisted over `path`. If any step fails the
/// previous document is left as it was and the temp file is removed.
pub async fn write_cached<T: Serialize>(path: &Path, data: &T) -> Result<(), StorageError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    // Ensure parent directory exists
    fs::create_dir_all(&parent).await?;

    let json = serde_json::to_vec_pretty(&CachedData::new(data))?;
    let path = path.to_path_buf();
    task::spawn_blocking(move || persist_synced(&parent, &path, &json))
        .await
        .map_err(io::Error::other)??;

    Ok(())
}

fn persist_synced(dir: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Delete a cached document. Missing files are ignored.
pub async fn delete(path: &Path) -> Result<(), StorageError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn sample(value: i32) -> TestData {
        TestData {
            name: "test".to_string(),
            value,
        }
    }

    #[tokio::test]
    async fn test_write_and_read_cached() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("test.json");

        write_cached(&path, &sample(42)).await.unwrap();

        let cached: Option<CachedData<TestData>> = read_cached(&path).await.unwrap();
        assert_eq!(cached.unwrap().data, sample(42));
        assert_eq!(dir_entries(path.parent().unwrap()), vec!["test.json".to_string()]);
    }

    #[tokio::test]
    async fn test_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let cached: Option<CachedData<TestData>> = read_cached(&path).await.unwrap();
        assert!(cached.is_none());
    }

    #[tokio::test]
    async fn test_read_corrupt_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<Option<CachedData<TestData>>, _> = read_cached(&path).await;
        assert!(matches!(result, Err(StorageError::Json(_))));
    }

    #[tokio::test]
    async fn test_failed_write_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        // A non-empty directory squatting on the target makes the final rename fail.
        let path = temp_dir.path().join("test.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let result = write_cached(&path, &sample(2)).await;
        assert!(matches!(result, Err(StorageError::Io(_))));

        assert_eq!(dir_entries(temp_dir.path()), vec!["test.json".to_string()]);
        assert!(path.join("keep").exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_unlocked_concurrent_writers_never_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let writers: Vec<_> = (0..16)
            .map(|i| {
                let path = path.clone();
                tokio::spawn(async move { write_cached(&path, &sample(i)).await })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap().unwrap();
        }

        let cached: CachedData<TestData> = read_cached(&path).await.unwrap().unwrap();
        assert!((0..16).contains(&cached.data.value));
        assert_eq!(dir_entries(temp_dir.path()), vec!["test.json".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        write_cached(&path, &sample(1)).await.unwrap();

        delete(&path).await.unwrap();
        delete(&path).await.unwrap();
        assert!(!path.exists());
    }
}
