use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileStorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("Storage error: {0}")]
    Io(String),
}

/// Blob store for uploaded files, addressed by the name it hands out.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persists `bytes` under a fresh name derived from `suggested_name`
    /// (only its extension is kept) and returns that name.
    async fn save(&self, bytes: &[u8], suggested_name: &str) -> Result<String, FileStorageError>;

    async fn read(&self, name: &str) -> Result<Vec<u8>, FileStorageError>;

    /// Deleting a missing file is not an error.
    async fn delete(&self, name: &str) -> Result<(), FileStorageError>;
}
