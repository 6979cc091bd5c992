/// File-backed implementation of the storage gateway
///
/// This module stores one file per key inside a data directory. Values are
/// written verbatim, so collection keys hold JSON documents that can be
/// inspected with any text editor.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::storage::{StorageError, StorageGateway};

/// Key/value store backed by one file per key
#[derive(Debug, Clone)]
pub struct FileGateway {
    dir: PathBuf,
}

impl FileGateway {
    /// Create a gateway rooted at the given data directory
    ///
    /// The directory is created if it does not exist yet.
    pub fn new(dir: PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&dir)?;
        tracing::info!("File storage initialized at: {:?}", dir);
        Ok(Self { dir })
    }

    /// Path of the file backing the given key
    ///
    /// Keys are sanitized to a safe filename so that arbitrary key strings
    /// cannot escape the data directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

#[async_trait]
impl StorageGateway for FileGateway {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::write(self.path_for(key), value).await?;
        tracing::debug!("Stored {} bytes under key '{}'", value.len(), key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set_remove_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = FileGateway::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(gateway.get("habits").await.unwrap(), None);

        gateway.set("habits", "[]").await.unwrap();
        assert_eq!(gateway.get("habits").await.unwrap().as_deref(), Some("[]"));

        gateway.remove("habits").await.unwrap();
        assert_eq!(gateway.get("habits").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = FileGateway::new(dir.path().to_path_buf()).unwrap();

        assert!(gateway.remove("never-written").await.is_ok());
    }

    #[tokio::test]
    async fn test_keys_with_separators_stay_inside_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = FileGateway::new(dir.path().to_path_buf()).unwrap();

        gateway.set("../escape/attempt", "x").await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
    }
}
