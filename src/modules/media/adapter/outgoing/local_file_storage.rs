use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::modules::media::application::ports::outgoing::{FileStorage, FileStorageError};

/// Flat directory of uploads. Stored names are random UUIDs that keep the
/// extension of the suggested name.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, FileStorageError> {
        if !is_plain_file_name(name) {
            warn!("Rejected file name {:?}", name);
            return Err(FileStorageError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(name))
    }

    fn fresh_name(suggested_name: &str) -> String {
        let ext = Path::new(suggested_name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| e.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|e| e.to_ascii_lowercase());

        match ext {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        }
    }
}

/// One path component, no separators, not hidden.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn save(&self, bytes: &[u8], suggested_name: &str) -> Result<String, FileStorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| FileStorageError::Io(e.to_string()))?;

        let name = Self::fresh_name(suggested_name);
        fs::write(self.root.join(&name), bytes)
            .await
            .map_err(|e| FileStorageError::Io(e.to_string()))?;

        debug!(file = %name, size = bytes.len(), "Stored upload");
        Ok(name)
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>, FileStorageError> {
        let path = self.path_for(name)?;
        fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => FileStorageError::NotFound(name.to_string()),
            _ => FileStorageError::Io(e.to_string()),
        })
    }

    async fn delete(&self, name: &str) -> Result<(), FileStorageError> {
        let path = self.path_for(name)?;
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FileStorageError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage() -> LocalFileStorage {
        LocalFileStorage::new(std::env::temp_dir().join(format!("uploads-{}", Uuid::new_v4())))
    }

    #[tokio::test]
    async fn save_read_delete() {
        let storage = temp_storage();

        let name = storage.save(b"png-bytes", "Screen Shot.PNG").await.unwrap();
        assert!(name.ends_with(".png"));
        assert_ne!(name, "Screen Shot.PNG");

        let bytes = storage.read(&name).await.unwrap();
        assert_eq!(bytes, b"png-bytes");

        storage.delete(&name).await.unwrap();
        assert_eq!(
            storage.read(&name).await,
            Err(FileStorageError::NotFound(name.clone()))
        );

        let _ = fs::remove_dir_all(storage.root()).await;
    }

    #[tokio::test]
    async fn deleting_missing_file_is_ok() {
        let storage = temp_storage();
        assert!(storage.delete("nothing-here.png").await.is_ok());
    }

    #[tokio::test]
    async fn rejects_traversal() {
        let storage = temp_storage();
        assert!(matches!(
            storage.read("../etc/passwd").await,
            Err(FileStorageError::InvalidName(_))
        ));
        assert!(matches!(
            storage.delete("..").await,
            Err(FileStorageError::InvalidName(_))
        ));
    }

    #[test]
    fn fresh_names_drop_odd_extensions() {
        let name = LocalFileStorage::fresh_name("evil.p/ng");
        assert!(!name.contains('/'));
        assert!(LocalFileStorage::fresh_name("noext").parse::<Uuid>().is_ok());
    }
}
