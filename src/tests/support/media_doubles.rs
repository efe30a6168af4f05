use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::media::application::ports::outgoing::{
    FileStorage, FileStorageError, ImageOptimiser, OptimiserError,
};

/// File storage kept in a map. `failing_saves` makes every save error out.
#[derive(Clone, Default)]
pub struct InMemoryFileStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    failing_saves: bool,
}

impl InMemoryFileStorage {
    pub fn failing_saves() -> Self {
        Self {
            failing_saves: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, name: &str, bytes: &[u8]) {
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), bytes.to_vec());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.lock().unwrap().contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn save(&self, bytes: &[u8], suggested_name: &str) -> Result<String, FileStorageError> {
        if self.failing_saves {
            return Err(FileStorageError::Io("disk unavailable".into()));
        }

        let ext = suggested_name.rsplit_once('.').map(|(_, e)| e).unwrap_or("bin");
        let name = format!("{}.{}", Uuid::new_v4(), ext);
        self.insert(&name, bytes);
        Ok(name)
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>, FileStorageError> {
        self.get(name)
            .ok_or_else(|| FileStorageError::NotFound(name.to_string()))
    }

    async fn delete(&self, name: &str) -> Result<(), FileStorageError> {
        self.files.lock().unwrap().remove(name);
        Ok(())
    }
}

/// Optimiser with a canned answer.
#[derive(Clone)]
pub struct FixedOptimiser {
    result: Result<Vec<u8>, OptimiserError>,
}

impl FixedOptimiser {
    pub fn returning(bytes: &[u8]) -> Self {
        Self {
            result: Ok(bytes.to_vec()),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(OptimiserError::Request("service unavailable".into())),
        }
    }
}

#[async_trait]
impl ImageOptimiser for FixedOptimiser {
    async fn optimise(&self, _bytes: &[u8]) -> Result<Vec<u8>, OptimiserError> {
        self.result.clone()
    }
}
