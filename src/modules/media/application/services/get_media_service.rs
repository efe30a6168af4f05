use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::media::application::domain::entities::{content_type_for, MediaFile};
use crate::modules::media::application::ports::incoming::use_cases::GetMediaUseCase;
use crate::modules::media::application::ports::outgoing::{FileStorage, FileStorageError};
use crate::shared::outcome::{Failure, Outcome};

pub const FILE_NOT_FOUND: &str = "File not found.";

impl From<FileStorageError> for Failure {
    fn from(err: FileStorageError) -> Self {
        match err {
            FileStorageError::NotFound(_) => Failure::not_found(FILE_NOT_FOUND),
            FileStorageError::InvalidName(_) => Failure::bad_request("Invalid file name."),
            FileStorageError::Io(msg) => Failure::internal(msg),
        }
    }
}

#[derive(Clone)]
pub struct GetMediaService {
    storage: Arc<dyn FileStorage>,
}

impl GetMediaService {
    pub fn new(storage: Arc<dyn FileStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl GetMediaUseCase for GetMediaService {
    async fn execute(&self, file_name: &str) -> Outcome<MediaFile> {
        let bytes = self.storage.read(file_name).await?;

        Ok(MediaFile {
            name: file_name.to_string(),
            content_type: content_type_for(file_name),
            bytes,
        })
    }
}
